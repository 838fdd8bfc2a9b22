//! footer1.xml writer

use super::document_writer::write_run;
use super::namespaces;
use super::xml::XML_DECLARATION;

/// Generate a footer part holding one centred paragraph in the Footer style
pub fn write_footer(text: &str) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:ftr xmlns:w="{}" xmlns:r="{}">"#,
        namespaces::W,
        namespaces::R
    ));
    xml.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Footer"/><w:jc w:val="center"/></w:pPr>"#);
    write_run(&mut xml, text);
    xml.push_str("</w:p>");
    xml.push_str("</w:ftr>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::BRANDING_TEXT;

    #[test]
    fn test_footer_contains_branding() {
        let xml = write_footer(BRANDING_TEXT);
        assert!(xml.contains(&format!(r#"<w:t xml:space="preserve">{}</w:t>"#, BRANDING_TEXT)));
        assert!(xml.contains(r#"<w:pStyle w:val="Footer"/><w:jc w:val="center"/>"#));
        assert!(xml.ends_with("</w:ftr>"));
    }
}
