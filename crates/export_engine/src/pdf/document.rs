//! PDF Document Structure
//!
//! Catalog, page tree and the document information dictionary.

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, FixedOffset};

pub const PDF_VERSION: &str = "1.4";

/// PDF document information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            producer: Some(format!("GospelWise export_engine {}", env!("CARGO_PKG_VERSION"))),
            ..Default::default()
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();

        let text_entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                dict.insert(key, text_string(value));
            }
        }

        if let Some(date) = &self.creation_date {
            dict.insert("CreationDate", PdfObject::string(pdf_date(date)));
        }

        dict
    }
}

/// A text string for the info dictionary: plain bytes for ASCII, otherwise
/// UTF-16BE with a byte order mark.
pub fn text_string(value: &str) -> PdfObject {
    if value.is_ascii() {
        return PdfObject::string(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    PdfObject::String(bytes)
}

/// `D:YYYYMMDDHHmmSS+HH'mm'`
pub fn pdf_date(date: &DateTime<FixedOffset>) -> String {
    let offset = date.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.abs();
    format!(
        "D:{}{}{:02}'{:02}'",
        date.format("%Y%m%d%H%M%S"),
        sign,
        offset / 3600,
        (offset % 3600) / 60
    )
}

/// Document catalog
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Catalog");
    dict.insert("Pages", PdfObject::Reference(pages_ref));
    dict
}

/// Page tree root
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Pages");
    let kids = page_refs.iter().map(|&r| PdfObject::Reference(r)).collect();
    dict.insert("Kids", PdfObject::Array(kids));
    dict.insert("Count", PdfObject::Integer(page_refs.len() as i64));
    dict
}
