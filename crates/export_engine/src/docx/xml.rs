//! Shared XML helpers for the part writers

use quick_xml::escape::escape;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Characters that may not appear in an XML 1.0 document at all
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Escape text for element content or attribute values, dropping any
/// characters XML cannot carry.
pub fn escape_xml(text: &str) -> String {
    if text.chars().all(is_xml_char) {
        escape(text).into_owned()
    } else {
        let cleaned: String = text.chars().filter(|c| is_xml_char(*c)).collect();
        escape(cleaned.as_str()).into_owned()
    }
}
