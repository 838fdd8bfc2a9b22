//! PDF Layout Options
//!
//! Page geometry, type sizes and spacing for PDF exports. Lengths are in
//! millimetres measured from the top-left corner of the page; font sizes are
//! in points.

use super::writer::{PdfError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Layout of a PDF export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Left, right and top margin
    pub margin: f64,
    /// Baseline past which the cursor triggers a new page
    pub content_bottom: f64,
    /// Baseline of the footer line
    pub footer_y: f64,
    /// Right edge of the "Page i of N" footer text
    pub page_number_right: f64,

    pub cover_title_y: f64,
    pub cover_subtitle_y: f64,
    pub cover_author_y: f64,
    pub cover_branding_y: f64,
    pub cover_title_size: f64,
    pub cover_subtitle_size: f64,
    pub cover_author_size: f64,
    pub cover_branding_size: f64,

    pub part_heading_size: f64,
    /// Cursor advance after a part heading
    pub part_heading_advance: f64,
    pub section_title_size: f64,
    /// Cursor advance after a section title
    pub title_advance: f64,
    pub body_size: f64,
    /// Advance per wrapped line
    pub line_height: f64,
    /// Gap after a text section
    pub text_gap: f64,
    /// Gap after each field of a labeled group
    pub group_gap: f64,
    pub footer_size: f64,
    /// Gray level (0-255) of branding and footer text
    pub muted_gray: u8,

    /// Compress page content streams
    pub compress: bool,
    /// Fail on characters the standard fonts cannot show instead of
    /// replacing them with '?'
    pub strict_encoding: bool,
    /// Fixed CreationDate; the current time is used when unset
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            content_bottom: 270.0,
            footer_y: 287.0,
            page_number_right: 195.0,
            cover_title_y: 80.0,
            cover_subtitle_y: 100.0,
            cover_author_y: 120.0,
            cover_branding_y: 280.0,
            cover_title_size: 24.0,
            cover_subtitle_size: 16.0,
            cover_author_size: 14.0,
            cover_branding_size: 10.0,
            part_heading_size: 18.0,
            part_heading_advance: 14.0,
            section_title_size: 16.0,
            title_advance: 10.0,
            body_size: 11.0,
            line_height: 6.0,
            text_gap: 10.0,
            group_gap: 8.0,
            footer_size: 8.0,
            muted_gray: 100,
            compress: true,
            strict_encoding: false,
            creation_date: None,
        }
    }
}

impl PdfLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_strict_encoding(mut self, strict: bool) -> Self {
        self.strict_encoding = strict;
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_content_bottom(mut self, bottom: f64) -> Self {
        self.content_bottom = bottom;
        self
    }

    /// Width available to wrapped text
    pub fn printable_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Horizontal centre of the page
    pub fn center_x(&self) -> f64 {
        self.page_width / 2.0
    }

    /// Reject geometry no page can be composed in
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("lineHeight", self.line_height),
            ("bodySize", self.body_size),
            ("sectionTitleSize", self.section_title_size),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(PdfError::InvalidLayout(format!("{} must be positive, got {}", name, value)));
            }
        }

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(PdfError::InvalidLayout(format!("margin must not be negative, got {}", self.margin)));
        }
        if self.printable_width() <= 0.0 {
            return Err(PdfError::InvalidLayout(format!(
                "margins of {}mm leave no printable width on a {}mm page",
                self.margin, self.page_width
            )));
        }
        if self.content_bottom <= self.margin || self.content_bottom > self.page_height {
            return Err(PdfError::InvalidLayout(format!(
                "content bottom {}mm must lie between the top margin ({}mm) and the page height ({}mm)",
                self.content_bottom, self.margin, self.page_height
            )));
        }
        // Title plus one body line must fit on an empty page
        if self.margin + self.title_advance + self.line_height > self.content_bottom {
            return Err(PdfError::InvalidLayout(
                "printable area is shorter than a section title and one line".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_a4() {
        let layout = PdfLayout::default();
        assert_eq!(layout.page_width, 210.0);
        assert_eq!(layout.page_height, 297.0);
        assert_eq!(layout.printable_width(), 170.0);
        assert_eq!(layout.center_x(), 105.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_degenerate_layouts_rejected() {
        assert!(PdfLayout::new().with_margin(105.0).validate().is_err());
        assert!(PdfLayout::new().with_page_size(0.0, 297.0).validate().is_err());
        assert!(PdfLayout::new().with_content_bottom(400.0).validate().is_err());
        assert!(PdfLayout::new().with_content_bottom(25.0).validate().is_err());
        assert!(PdfLayout::new().with_margin(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let layout: PdfLayout = serde_json::from_str(r#"{"margin": 25, "compress": false}"#).unwrap();
        assert_eq!(layout.margin, 25.0);
        assert!(!layout.compress);
        assert_eq!(layout.body_size, 11.0);
        assert!(layout.creation_date.is_none());
    }

    #[test]
    fn test_creation_date_round_trips_as_rfc3339() {
        let date = DateTime::parse_from_rfc3339("2024-06-01T09:30:00+02:00").unwrap();
        let layout = PdfLayout::new().with_creation_date(date);
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("2024-06-01T09:30:00+02:00"));
    }
}
