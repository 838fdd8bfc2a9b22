//! PDF Content Stream Generation
//!
//! Builder for the page-description operators used by exports:
//!
//! - BT/ET: begin/end text object
//! - Tf: set font and size
//! - Tm: set text matrix
//! - Tj: show text string
//! - g: set gray fill color

use super::objects::{escape_string, format_real};
use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set the fill color to grayscale, 0.0 black to 1.0 white (g)
    pub fn set_fill_gray(&mut self, gray: f64) -> &mut Self {
        self.write_fmt(format_args!("{} g\n", format_real(gray)));
        self
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", resource_name, format_real(size)));
        self
    }

    /// Place the next glyph at (x, y) in points from the bottom-left (Tm)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "1 0 0 1 {} {} Tm\n",
            format_real(x),
            format_real(y)
        ));
        self
    }

    /// Show an already-encoded string (Tj)
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        self.data.extend_from_slice(&escape_string(encoded));
        self.write_line(" Tj");
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        // Writing into a Vec cannot fail
        let _ = self.data.write_fmt(args);
    }
}
