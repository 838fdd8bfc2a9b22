//! Word export style settings

use super::error::{DocxError, DocxResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fonts, sizes and spacing for the generated document.
///
/// Sizes are in half-points and spacing in twentieths of a point, the units
/// WordprocessingML uses directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocxStyle {
    pub body_font: String,
    /// Normal text size (24 = 12pt)
    pub body_size: u32,
    /// Default space after a paragraph
    pub paragraph_after: u32,
    /// Space after section body text
    pub content_after: u32,
    /// Space after a "{label}:" sub-heading
    pub label_after: u32,
    /// Space after the title, subtitle and part headings
    pub heading_after: u32,
    /// Space after the author line on the cover
    pub author_after: u32,
    /// Footer text size (16 = 8pt)
    pub footer_size: u32,
    /// Footer colour as RRGGBB
    pub footer_color: String,
    /// Fixed creation timestamp for core properties; the current time is used
    /// when unset
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Default for DocxStyle {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            body_size: 24,
            paragraph_after: 200,
            content_after: 300,
            label_after: 100,
            heading_after: 400,
            author_after: 800,
            footer_size: 16,
            footer_color: "888888".to_string(),
            creation_date: None,
        }
    }
}

impl DocxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creation_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn validate(&self) -> DocxResult<()> {
        if self.body_font.trim().is_empty() {
            return Err(DocxError::InvalidStyle("body font is empty".to_string()));
        }
        if self.body_size == 0 || self.footer_size == 0 {
            return Err(DocxError::InvalidStyle("font sizes must be positive".to_string()));
        }
        let hex = self.footer_color.len() == 6 && self.footer_color.chars().all(|c| c.is_ascii_hexdigit());
        if !hex {
            return Err(DocxError::InvalidStyle(format!(
                "footer colour {:?} is not RRGGBB",
                self.footer_color
            )));
        }
        Ok(())
    }
}
