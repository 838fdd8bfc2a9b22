//! WinAnsiEncoding (Windows-1252) for standard-font text

use super::writer::{PdfError, Result};

/// Windows-1252 code for `c`, if it has one
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => {
            let byte = match c {
                '\u{20AC}' => 0x80,
                '\u{201A}' => 0x82,
                '\u{0192}' => 0x83,
                '\u{201E}' => 0x84,
                '\u{2026}' => 0x85,
                '\u{2020}' => 0x86,
                '\u{2021}' => 0x87,
                '\u{02C6}' => 0x88,
                '\u{2030}' => 0x89,
                '\u{0160}' => 0x8A,
                '\u{2039}' => 0x8B,
                '\u{0152}' => 0x8C,
                '\u{017D}' => 0x8E,
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201C}' => 0x93,
                '\u{201D}' => 0x94,
                '\u{2022}' => 0x95,
                '\u{2013}' => 0x96,
                '\u{2014}' => 0x97,
                '\u{02DC}' => 0x98,
                '\u{2122}' => 0x99,
                '\u{0161}' => 0x9A,
                '\u{203A}' => 0x9B,
                '\u{0153}' => 0x9C,
                '\u{017E}' => 0x9E,
                '\u{0178}' => 0x9F,
                '\t' => b' ',
                _ => return None,
            };
            Some(byte)
        }
    }
}

/// Encodes text for the Times fonts.
///
/// In lenient mode characters without a WinAnsi code become `?`; in strict
/// mode the first one fails the render.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinAnsiEncoder {
    pub strict: bool,
}

impl WinAnsiEncoder {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len());
        let mut replaced = 0usize;

        for c in text.chars() {
            match win_ansi_byte(c) {
                Some(byte) => out.push(byte),
                // Zero-width joiners and variation selectors have nothing to draw
                None if is_invisible(c) => {}
                None if self.strict => {
                    return Err(PdfError::UnsupportedCharacter {
                        character: c,
                        text: text.to_string(),
                    });
                }
                None => {
                    out.push(b'?');
                    replaced += 1;
                }
            }
        }

        if replaced > 0 {
            tracing::warn!(replaced, text, "characters outside WinAnsiEncoding replaced with '?'");
        }
        Ok(out)
    }
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' | '\u{FEFF}')
}
