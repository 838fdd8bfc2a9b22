//! Composed pages and their conversion to content streams

use super::content::ContentStream;
use super::encoding::WinAnsiEncoder;
use super::fonts::{PdfFont, PT_PER_MM};
use super::writer::Result;

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRenderInfo {
    pub text: String,
    /// Left edge of the line, mm from the left of the page
    pub x: f64,
    /// Baseline, mm from the top of the page
    pub y: f64,
    pub font: PdfFont,
    /// Size in points
    pub size: f64,
    /// Gray level, 0 black to 255 white
    pub gray: u8,
}

/// A fully composed page
#[derive(Debug, Clone, PartialEq)]
pub struct PageRenderInfo {
    /// Width in mm
    pub width: f64,
    /// Height in mm
    pub height: f64,
    pub items: Vec<TextRenderInfo>,
}

impl PageRenderInfo {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn add_text(&mut self, item: TextRenderInfo) {
        self.items.push(item);
    }

    /// All text on the page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.text.as_str())
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }
}

/// Draw a page into a content stream, converting from top-left millimetres
/// to PDF's bottom-left points.
pub fn render_page(page: &PageRenderInfo, encoder: &WinAnsiEncoder) -> Result<ContentStream> {
    let mut content = ContentStream::new();
    if page.items.is_empty() {
        return Ok(content);
    }

    let page_height_pt = page.height * PT_PER_MM;
    let mut current_font: Option<(PdfFont, f64)> = None;
    let mut current_gray: Option<u8> = None;

    content.begin_text();
    for item in &page.items {
        if current_font != Some((item.font, item.size)) {
            content.set_font(item.font.resource_name(), item.size);
            current_font = Some((item.font, item.size));
        }
        if current_gray != Some(item.gray) {
            content.set_fill_gray(item.gray as f64 / 255.0);
            current_gray = Some(item.gray);
        }

        let encoded = encoder.encode(&item.text)?;
        content
            .set_text_position(item.x * PT_PER_MM, page_height_pt - item.y * PT_PER_MM)
            .show_text(&encoded);
    }
    content.end_text();

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, y: f64, font: PdfFont, gray: u8) -> TextRenderInfo {
        TextRenderInfo {
            text: text.to_string(),
            x: 20.0,
            y,
            font,
            size: 11.0,
            gray,
        }
    }

    #[test]
    fn test_render_page_switches_state_only_on_change() {
        let mut page = PageRenderInfo::new(210.0, 297.0);
        page.add_text(line("Premise", 20.0, PdfFont::TimesBold, 0));
        page.add_text(line("first", 30.0, PdfFont::TimesRoman, 0));
        page.add_text(line("second", 36.0, PdfFont::TimesRoman, 0));
        page.add_text(line("footer", 287.0, PdfFont::TimesRoman, 100));

        let content = render_page(&page, &WinAnsiEncoder::default()).unwrap();
        let content = String::from_utf8(content.into_bytes()).unwrap();

        assert_eq!(content.matches("Tf").count(), 2);
        assert_eq!(content.matches(" g\n").count(), 2);
        assert_eq!(content.matches("Tj").count(), 4);
        // 20mm in from the left, 20mm down from the top of an A4 page
        assert!(content.contains("1 0 0 1 56.6929 785.1969 Tm"));
    }

    #[test]
    fn test_empty_page_has_empty_stream() {
        let page = PageRenderInfo::new(210.0, 297.0);
        assert!(render_page(&page, &WinAnsiEncoder::default()).unwrap().is_empty());
    }

    #[test]
    fn test_strict_encoder_error_propagates() {
        let mut page = PageRenderInfo::new(210.0, 297.0);
        page.add_text(line("平安", 20.0, PdfFont::TimesRoman, 0));
        assert!(render_page(&page, &WinAnsiEncoder::new(true)).is_err());
    }
}
