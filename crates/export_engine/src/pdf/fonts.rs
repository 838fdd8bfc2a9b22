//! PDF Font Handling
//!
//! Exports use two of the standard 14 fonts, Times-Roman and Times-Bold, so
//! nothing is embedded. Widths are estimated from character classes rather
//! than full AFM tables; the estimate only needs to be good enough to wrap
//! paragraphs inside the printable width.

use super::objects::{PdfDictionary, PdfObject};
use unicode_segmentation::UnicodeSegmentation;

/// Points per millimetre
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Fonts available to the page composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PdfFont {
    TimesRoman,
    TimesBold,
}

impl PdfFont {
    /// Every font, in resource-dictionary order
    pub const ALL: [PdfFont; 2] = [PdfFont::TimesRoman, PdfFont::TimesBold];

    /// Name used in page resource dictionaries and `Tf` operators
    pub fn resource_name(&self) -> &'static str {
        match self {
            PdfFont::TimesRoman => "F1",
            PdfFont::TimesBold => "F2",
        }
    }

    /// PostScript name of the standard font
    pub fn base_font(&self) -> &'static str {
        match self {
            PdfFont::TimesRoman => "Times-Roman",
            PdfFont::TimesBold => "Times-Bold",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, PdfFont::TimesBold)
    }

    /// Font dictionary for a non-embedded Type1 font
    pub fn font_dict(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::typed("Font");
        dict.insert("Subtype", PdfObject::name("Type1"));
        dict.insert("BaseFont", PdfObject::name(self.base_font()));
        dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
        dict
    }
}

/// Advance width of a character in thousandths of an em
fn char_advance(c: char) -> u32 {
    match c {
        ' ' | '.' | ',' | ':' | ';' => 250,
        'i' | 'j' | 'l' | '\'' | '!' | '|' => 278,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '-' | '[' | ']' | '"' => 333,
        'a' | 'c' | 'e' | 's' | 'z' | '?' => 444,
        'm' => 778,
        'w' | 'D' | 'H' | 'N' | 'U' => 722,
        'M' => 889,
        'W' => 944,
        'A'..='Z' => 667,
        '0'..='9' => 500,
        '\u{2014}' | '\u{2026}' => 1000,
        c if c.is_ascii() => 500,
        _ => 556,
    }
}

/// Estimated width of one grapheme cluster in em units. Combining marks
/// ride on the base character and add nothing.
pub fn grapheme_width_em(grapheme: &str, font: PdfFont) -> f64 {
    let base = grapheme.chars().next().map(char_advance).unwrap_or(0) as f64 / 1000.0;
    if font.is_bold() {
        base * 1.06
    } else {
        base
    }
}

/// Estimated width of a string in millimetres at the given point size
pub fn text_width_mm(text: &str, font: PdfFont, size_pt: f64) -> f64 {
    let em: f64 = text
        .graphemes(true)
        .map(|g| grapheme_width_em(g, font))
        .sum();
    em * size_pt / PT_PER_MM
}
