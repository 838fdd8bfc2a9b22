//! Page composition
//!
//! Turns a content plan into positioned lines of text. The composer owns a
//! [`Cursor`] for the duration of one export: the cover is drawn at fixed
//! positions, parts and sections flow down from the top margin, and pages
//! are allocated lazily so a break at the very end never leaves a blank
//! page. Footers are stamped last, once the page count is known.

use super::fonts::{text_width_mm, PdfFont};
use super::options::PdfLayout;
use super::page::{PageRenderInfo, TextRenderInfo};
use super::wrap::wrap_text;
use super::writer::Result;
use crate::branding::BRANDING_TEXT;
use crate::plan::{ContentPlan, Section, SectionContent};

const EPSILON: f64 = 1e-6;

/// Current write position: baseline in mm from the top of the page, and
/// the index of the page being written
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub y: f64,
    pub page_index: usize,
}

/// Text of the cover page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverPage {
    pub title: String,
    pub subtitle: String,
    /// "By {name}", omitted for anonymous authors
    pub author_line: Option<String>,
}

/// Compose every page of an export, footers included
pub fn compose(plan: &ContentPlan, cover: &CoverPage, layout: &PdfLayout) -> Result<Vec<PageRenderInfo>> {
    layout.validate()?;

    let mut composer = PageComposer::new(layout);
    composer.cover(cover);

    for part in &plan.parts {
        composer.break_page();
        composer.part_heading(&part.heading);
        for section in &part.sections {
            composer.section(section);
        }
    }

    Ok(composer.finish())
}

struct PageComposer<'a> {
    layout: &'a PdfLayout,
    pages: Vec<PageRenderInfo>,
    cursor: Cursor,
    /// Where section content starts on the current page: the top margin,
    /// or just below a part heading
    content_top: f64,
}

impl<'a> PageComposer<'a> {
    fn new(layout: &'a PdfLayout) -> Self {
        Self {
            layout,
            pages: Vec::new(),
            cursor: Cursor {
                y: layout.margin,
                page_index: 0,
            },
            content_top: layout.margin,
        }
    }

    /// True when nothing but a part heading has been written on this page
    fn at_top(&self) -> bool {
        self.cursor.y <= self.content_top + EPSILON
    }

    /// Move the cursor to the top of the next page. Breaking on an
    /// unwritten page is a no-op.
    fn break_page(&mut self) {
        self.content_top = self.layout.margin;
        if self.cursor.page_index >= self.pages.len() {
            self.cursor.y = self.layout.margin;
            return;
        }
        self.cursor = Cursor {
            y: self.layout.margin,
            page_index: self.pages.len(),
        };
    }

    fn current_page(&mut self) -> &mut PageRenderInfo {
        while self.pages.len() <= self.cursor.page_index {
            self.pages
                .push(PageRenderInfo::new(self.layout.page_width, self.layout.page_height));
            tracing::debug!(page = self.pages.len(), "allocated PDF page");
        }
        let index = self.cursor.page_index;
        &mut self.pages[index]
    }

    fn draw(&mut self, text: &str, x: f64, y: f64, font: PdfFont, size: f64, gray: u8) {
        self.current_page().add_text(TextRenderInfo {
            text: text.to_string(),
            x,
            y,
            font,
            size,
            gray,
        });
    }

    fn draw_centered(&mut self, text: &str, y: f64, font: PdfFont, size: f64, gray: u8) {
        let x = self.layout.center_x() - text_width_mm(text, font, size) / 2.0;
        self.draw(text, x, y, font, size, gray);
    }

    /// Break first if a block of `height` will not fit below the cursor but
    /// would fit on a fresh page. Blocks taller than a page stay put as long
    /// as their first `min_height` fits.
    fn keep_together(&mut self, height: f64, min_height: f64) {
        if self.at_top() {
            return;
        }
        let bottom = self.layout.content_bottom + EPSILON;
        if self.cursor.y + height <= bottom {
            return;
        }
        let fits_fresh_page = self.layout.margin + height <= bottom;
        if fits_fresh_page || self.cursor.y + min_height > bottom {
            self.break_page();
        }
    }

    /// Draw wrapped lines at the cursor, continuing on the next page when a
    /// baseline would pass the content bottom
    fn flow_lines(&mut self, lines: &[String], font: PdfFont, size: f64) {
        for line in lines {
            if self.cursor.y > self.layout.content_bottom + EPSILON {
                self.break_page();
            }
            let y = self.cursor.y;
            self.draw(line, self.layout.margin, y, font, size, 0);
            self.cursor.y += self.layout.line_height;
        }
    }

    fn wrap_body(&self, text: &str) -> Vec<String> {
        wrap_text(
            text,
            self.layout.printable_width(),
            PdfFont::TimesRoman,
            self.layout.body_size,
        )
    }

    fn cover(&mut self, cover: &CoverPage) {
        let layout = self.layout;
        let font = PdfFont::TimesRoman;

        let title_lines = wrap_text(&cover.title, layout.printable_width(), font, layout.cover_title_size);
        for (i, line) in title_lines.iter().enumerate() {
            let y = layout.cover_title_y + i as f64 * layout.title_advance;
            self.draw_centered(line, y, font, layout.cover_title_size, 0);
        }

        // Lines the title wraps past the room above the subtitle push the
        // subtitle and author down by the same amount
        let last_title_y = layout.cover_title_y + (title_lines.len() - 1) as f64 * layout.title_advance;
        let shift = (last_title_y + layout.title_advance - layout.cover_subtitle_y).max(0.0);

        self.draw_centered(
            &cover.subtitle,
            layout.cover_subtitle_y + shift,
            font,
            layout.cover_subtitle_size,
            0,
        );
        if let Some(author_line) = &cover.author_line {
            self.draw_centered(
                author_line,
                layout.cover_author_y + shift,
                font,
                layout.cover_author_size,
                0,
            );
        }
        self.draw_centered(
            BRANDING_TEXT,
            layout.cover_branding_y,
            font,
            layout.cover_branding_size,
            layout.muted_gray,
        );
    }

    fn part_heading(&mut self, heading: &str) {
        let y = self.cursor.y;
        let (margin, size) = (self.layout.margin, self.layout.part_heading_size);
        self.draw(heading, margin, y, PdfFont::TimesBold, size, 0);
        self.cursor.y += self.layout.part_heading_advance;
        self.content_top = self.cursor.y;
    }

    fn section(&mut self, section: &Section) {
        let layout = self.layout;

        if section.force_page_break_before && !self.at_top() {
            self.break_page();
        }

        match &section.content {
            SectionContent::Text(text) => {
                let lines = self.wrap_body(text);
                let height = layout.title_advance + (lines.len() - 1) as f64 * layout.line_height;
                self.keep_together(height, layout.title_advance);
                self.section_title(&section.title);
                self.flow_lines(&lines, PdfFont::TimesRoman, layout.body_size);
                self.cursor.y += layout.text_gap;
            }
            SectionContent::Group(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    let lines = self.wrap_body(&field.value);
                    let field_height = lines.len() as f64 * layout.line_height;
                    if i == 0 {
                        let lead = layout.title_advance;
                        self.keep_together(lead + field_height, lead + layout.line_height);
                        self.section_title(&section.title);
                    } else {
                        self.keep_together(field_height, layout.line_height);
                    }

                    let y = self.cursor.y;
                    let label = format!("{}:", field.label);
                    self.draw(&label, layout.margin, y, PdfFont::TimesBold, layout.body_size, 0);
                    self.cursor.y += layout.line_height;
                    self.flow_lines(&lines, PdfFont::TimesRoman, layout.body_size);
                    self.cursor.y += layout.group_gap;
                }
            }
        }

        if self.cursor.y > layout.content_bottom + EPSILON {
            self.break_page();
        }
    }

    fn section_title(&mut self, title: &str) {
        let y = self.cursor.y;
        let (margin, size) = (self.layout.margin, self.layout.section_title_size);
        self.draw(title, margin, y, PdfFont::TimesBold, size, 0);
        self.cursor.y += self.layout.title_advance;
    }

    /// Stamp branding and "Page i of N" on every page
    fn finish(mut self) -> Vec<PageRenderInfo> {
        let layout = self.layout;
        let total = self.pages.len();
        let font = PdfFont::TimesRoman;

        for (i, page) in self.pages.iter_mut().enumerate() {
            let branding_x = layout.center_x() - text_width_mm(BRANDING_TEXT, font, layout.footer_size) / 2.0;
            page.add_text(TextRenderInfo {
                text: BRANDING_TEXT.to_string(),
                x: branding_x,
                y: layout.footer_y,
                font,
                size: layout.footer_size,
                gray: layout.muted_gray,
            });

            let number = format!("Page {} of {}", i + 1, total);
            let number_x = layout.page_number_right - text_width_mm(&number, font, layout.footer_size);
            page.add_text(TextRenderInfo {
                text: number,
                x: number_x,
                y: layout.footer_y,
                font,
                size: layout.footer_size,
                gray: layout.muted_gray,
            });
        }

        tracing::debug!(pages = total, "composed PDF pages");
        self.pages
    }
}
