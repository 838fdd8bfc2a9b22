//! Greedy line wrapping for body text
//!
//! Break opportunities come from UAX #14; widths come from the font
//! estimates in [`super::fonts`]. A word wider than the line is split at
//! grapheme boundaries.

use super::fonts::{grapheme_width_em, text_width_mm, PdfFont, PT_PER_MM};
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

struct LineBuilder {
    font: PdfFont,
    size: f64,
    max_width: f64,
    lines: Vec<String>,
    line: String,
    width: f64,
}

impl LineBuilder {
    fn width_of(&self, text: &str) -> f64 {
        text_width_mm(text, self.font, self.size)
    }

    fn flush(&mut self) {
        let line = std::mem::take(&mut self.line);
        self.lines.push(line.trim_end().to_string());
        self.width = 0.0;
    }

    /// Append one unbreakable segment (a word plus its trailing spaces)
    fn place(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        let visible = segment.trim_end();
        let visible_width = self.width_of(visible);

        if self.width + visible_width <= self.max_width {
            self.line.push_str(segment);
            self.width += self.width_of(segment);
            return;
        }

        if !self.line.trim_end().is_empty() {
            self.flush();
        } else {
            self.line.clear();
            self.width = 0.0;
        }

        if visible_width <= self.max_width {
            self.line.push_str(segment);
            self.width = self.width_of(segment);
            return;
        }

        for grapheme in visible.graphemes(true) {
            let grapheme_width = grapheme_width_em(grapheme, self.font) * self.size / PT_PER_MM;
            if self.width + grapheme_width > self.max_width && !self.line.is_empty() {
                self.flush();
            }
            self.line.push_str(grapheme);
            self.width += grapheme_width;
        }
        let trailing = &segment[visible.len()..];
        self.line.push_str(trailing);
        self.width += self.width_of(trailing);
    }
}

/// Wrap `text` into lines no wider than `max_width` millimetres.
///
/// Embedded newlines always break; blank lines are kept as empty strings.
/// Returns at least one line.
pub fn wrap_text(text: &str, max_width: f64, font: PdfFont, size: f64) -> Vec<String> {
    let mut builder = LineBuilder {
        font,
        size,
        max_width,
        lines: Vec::new(),
        line: String::new(),
        width: 0.0,
    };

    let mut start = 0;
    for (end, opportunity) in linebreaks(text) {
        let segment = &text[start..end];
        start = end;

        match opportunity {
            BreakOpportunity::Mandatory => {
                builder.place(segment.trim_end_matches(is_line_terminator));
                let at_end = end == text.len();
                // The final opportunity only closes a line if something is pending
                if !at_end || !builder.line.is_empty() || builder.lines.is_empty() {
                    builder.flush();
                }
            }
            BreakOpportunity::Allowed => builder.place(segment),
        }
    }

    if !builder.line.is_empty() {
        builder.flush();
    }
    if builder.lines.is_empty() {
        builder.lines.push(String::new());
    }
    builder.lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIDTH: f64 = 170.0;

    fn wrap(text: &str) -> Vec<String> {
        wrap_text(text, WIDTH, PdfFont::TimesRoman, 11.0)
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap("Not provided"), vec!["Not provided"]);
    }

    #[test]
    fn test_embedded_newlines_break() {
        assert_eq!(wrap("first\nsecond"), vec!["first", "second"]);
        assert_eq!(wrap("first\r\n\r\nthird"), vec!["first", "", "third"]);
        assert_eq!(wrap("trailing\n"), vec!["trailing"]);
    }

    #[test]
    fn test_long_paragraph_wraps_within_width() {
        let text = "The shepherd walked the long road home through the valley of shadow. ".repeat(12);
        let lines = wrap(&text);
        assert!(lines.len() > 3);
        for line in &lines {
            assert!(text_width_mm(line, PdfFont::TimesRoman, 11.0) <= WIDTH);
            assert!(!line.ends_with(' '));
        }
    }

    #[test]
    fn test_overlong_word_is_split() {
        let word = "a".repeat(500);
        let lines = wrap(&word);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_empty_text_yields_one_line() {
        assert_eq!(wrap(""), vec![String::new()]);
    }

    proptest! {
        #[test]
        fn prop_lines_fit_and_keep_words(words in proptest::collection::vec("[A-Za-z]{1,40}", 0..80)) {
            let text = words.join(" ");
            let lines = wrap(&text);
            for line in &lines {
                prop_assert!(text_width_mm(line, PdfFont::TimesRoman, 11.0) <= WIDTH + 1e-9);
            }
            let rejoined: String = lines.concat().split_whitespace().collect();
            let original: String = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, original);
        }
    }
}
