//! Document.xml writer
//!
//! Converts flow blocks to WordprocessingML paragraphs.

use super::flow::{FlowBlock, FlowDocument};
use super::namespaces;
use super::style::DocxStyle;
use super::xml::{escape_xml, XML_DECLARATION};

/// A4 in twentieths of a point
const PAGE_WIDTH_TWIPS: u32 = 11906;
const PAGE_HEIGHT_TWIPS: u32 = 16838;
/// One inch
const PAGE_MARGIN_TWIPS: u32 = 1440;

/// Paragraph properties derived for one block
struct ParagraphFormat {
    style_id: Option<&'static str>,
    centered: bool,
    space_after: u32,
}

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    style: &'a DocxStyle,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(style: &'a DocxStyle) -> Self {
        Self { style }
    }

    /// Generate document.xml content. `footer_id` is the relationship ID of
    /// the default footer part.
    pub fn write(&self, document: &FlowDocument, footer_id: &str) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for block in &document.blocks {
            self.write_block(&mut xml, block);
        }
        self.write_section_properties(&mut xml, footer_id);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    fn format_for(&self, block: &FlowBlock) -> ParagraphFormat {
        let s = self.style;
        let (style_id, centered, space_after) = match block {
            FlowBlock::Title(_) => (Some("Title"), true, s.heading_after),
            FlowBlock::Subtitle(_) => (Some("Heading1"), true, s.heading_after),
            FlowBlock::Author(_) => (Some("Heading2"), true, s.author_after),
            FlowBlock::PartHeading(_) => (Some("Heading1"), false, s.heading_after),
            FlowBlock::Heading(_) => (Some("Heading2"), false, s.paragraph_after),
            FlowBlock::SubHeading(_) => (Some("Heading3"), false, s.label_after),
            FlowBlock::Paragraph(_) | FlowBlock::PageBreak => (None, false, s.content_after),
        };
        ParagraphFormat {
            style_id,
            centered,
            space_after,
        }
    }

    fn write_block(&self, xml: &mut String, block: &FlowBlock) {
        let Some(text) = block.text() else {
            xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
            return;
        };

        let format = self.format_for(block);
        xml.push_str("<w:p>");
        xml.push_str("<w:pPr>");
        if let Some(style_id) = format.style_id {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style_id));
        }
        if format.centered {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }
        xml.push_str(&format!(r#"<w:spacing w:after="{}"/>"#, format.space_after));
        xml.push_str("</w:pPr>");
        write_run(xml, text);
        xml.push_str("</w:p>");
    }

    fn write_section_properties(&self, xml: &mut String, footer_id: &str) {
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:footerReference w:type="default" r:id="{}"/>"#,
            escape_xml(footer_id)
        ));
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/>"#,
            m = PAGE_MARGIN_TWIPS
        ));
        xml.push_str("</w:sectPr>");
    }
}

/// Write text as a single run; embedded newlines become line breaks.
pub(super) fn write_run(xml: &mut String, text: &str) {
    xml.push_str("<w:r>");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            xml.push_str(&format!(
                r#"<w:t xml:space="preserve">{}</w:t>"#,
                escape_xml(line)
            ));
        }
    }
    xml.push_str("</w:r>");
}
