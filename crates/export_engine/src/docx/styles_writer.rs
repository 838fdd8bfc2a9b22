//! Styles.xml writer
//!
//! Generates the fixed style sheet used by every export.

use super::namespaces;
use super::style::DocxStyle;
use super::xml::{escape_xml, XML_DECLARATION};

/// A paragraph style definition
struct ParagraphStyleDef {
    id: &'static str,
    name: &'static str,
    /// Size in half-points; `None` inherits Normal
    size: Option<u32>,
    bold: bool,
    outline_level: Option<u8>,
}

/// Heading hierarchy sized relative to a 12pt body
const STYLE_DEFS: [ParagraphStyleDef; 4] = [
    ParagraphStyleDef { id: "Title", name: "Title", size: Some(56), bold: true, outline_level: None },
    ParagraphStyleDef { id: "Heading1", name: "heading 1", size: Some(32), bold: true, outline_level: Some(0) },
    ParagraphStyleDef { id: "Heading2", name: "heading 2", size: Some(28), bold: true, outline_level: Some(1) },
    ParagraphStyleDef { id: "Heading3", name: "heading 3", size: None, bold: true, outline_level: Some(2) },
];

/// Writer for styles.xml
pub struct StylesWriter<'a> {
    style: &'a DocxStyle,
}

impl<'a> StylesWriter<'a> {
    pub fn new(style: &'a DocxStyle) -> Self {
        Self { style }
    }

    /// Generate styles.xml content
    pub fn write(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

        self.write_doc_defaults(&mut xml);
        self.write_normal(&mut xml);
        for def in &STYLE_DEFS {
            self.write_paragraph_style(&mut xml, def);
        }
        self.write_footer_style(&mut xml);

        xml.push_str("</w:styles>");
        xml
    }

    fn write_doc_defaults(&self, xml: &mut String) {
        let font = escape_xml(&self.style.body_font);
        xml.push_str("<w:docDefaults>");
        xml.push_str("<w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:cs="{f}"/>"#,
            f = font
        ));
        xml.push_str(&format!(
            r#"<w:sz w:val="{s}"/><w:szCs w:val="{s}"/>"#,
            s = self.style.body_size
        ));
        xml.push_str("</w:rPr></w:rPrDefault>");
        xml.push_str("<w:pPrDefault><w:pPr>");
        xml.push_str(&format!(
            r#"<w:spacing w:after="{}"/>"#,
            self.style.paragraph_after
        ));
        xml.push_str("</w:pPr></w:pPrDefault>");
        xml.push_str("</w:docDefaults>");
    }

    fn write_normal(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/>"#);
        xml.push_str(&format!(
            r#"<w:pPr><w:spacing w:after="{}"/></w:pPr>"#,
            self.style.paragraph_after
        ));
        xml.push_str(&format!(
            r#"<w:rPr><w:rFonts w:ascii="{f}" w:hAnsi="{f}"/><w:sz w:val="{s}"/></w:rPr>"#,
            f = escape_xml(&self.style.body_font),
            s = self.style.body_size
        ));
        xml.push_str("</w:style>");
    }

    fn write_paragraph_style(&self, xml: &mut String, def: &ParagraphStyleDef) {
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{}">"#,
            def.id
        ));
        xml.push_str(&format!(r#"<w:name w:val="{}"/>"#, def.name));
        xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#);

        xml.push_str(r#"<w:pPr><w:keepNext/>"#);
        if let Some(level) = def.outline_level {
            xml.push_str(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level));
        }
        xml.push_str("</w:pPr>");

        xml.push_str("<w:rPr>");
        if def.bold {
            xml.push_str("<w:b/>");
        }
        if let Some(size) = def.size {
            xml.push_str(&format!(r#"<w:sz w:val="{s}"/><w:szCs w:val="{s}"/>"#, s = size));
        }
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");
    }

    fn write_footer_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Footer">"#);
        xml.push_str(r#"<w:name w:val="footer"/><w:basedOn w:val="Normal"/>"#);
        xml.push_str(r#"<w:pPr><w:jc w:val="center"/><w:spacing w:after="0"/></w:pPr>"#);
        xml.push_str(&format!(
            r#"<w:rPr><w:color w:val="{}"/><w:sz w:val="{s}"/><w:szCs w:val="{s}"/></w:rPr>"#,
            escape_xml(&self.style.footer_color),
            s = self.style.footer_size
        ));
        xml.push_str("</w:style>");
    }
}
