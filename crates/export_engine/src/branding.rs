//! Branding and labeling utilities shared by both export formats
//!
//! Everything here is a pure function over strings and numbers so that the
//! PDF and Word backends print identical literals.

use crate::export::ExportFormat;
use project_model::{Author, ProjectType};

/// Footer line stamped on every page of every export
pub const BRANDING_TEXT: &str = "Created using the GospelWise Author App | gospelwiseauthor.app";

/// Placeholder for an empty body section
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder for an unset word-count goal. Distinct from [`NOT_PROVIDED`].
pub const NOT_SPECIFIED: &str = "Not specified";

/// Cover and metadata title when the project has none
pub const UNTITLED_PROJECT: &str = "Untitled Project";

/// Filename stem when the project has no title
pub const FILENAME_FALLBACK: &str = "Project";

/// Document creator when the author has no name
pub const DEFAULT_CREATOR: &str = "GospelWise Author";

/// True if the value has any non-whitespace content
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// The value itself when present, otherwise [`NOT_PROVIDED`]
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

/// Turn a camelCase field key into a display label.
///
/// A space goes before every uppercase letter after the first character,
/// then the first character is uppercased: `protagonistGoals` becomes
/// "Protagonist Goals" and `premise` becomes "Premise".
pub fn format_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
            continue;
        }
        if c.is_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

/// Group digits in threes with commas (`80000` -> "80,000")
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a word-count goal. Zero counts as unset.
pub fn format_word_count(goal: Option<u64>) -> String {
    match goal {
        Some(n) if n > 0 => format!("{} words", format_thousands(n)),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// `{title}_Export.{ext}`, falling back to "Project" for a blank title
pub fn export_filename(title: Option<&str>, format: ExportFormat) -> String {
    let stem = match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => FILENAME_FALLBACK,
    };
    format!("{}_Export.{}", stem, format.extension())
}

/// Title printed on the cover page and in document metadata
pub fn display_title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => UNTITLED_PROJECT,
    }
}

/// "{type} Project" cover subtitle
pub fn cover_subtitle(project_type: ProjectType) -> String {
    format!("{} Project", project_type.as_str())
}

/// "By {name}", or nothing for an anonymous author
pub fn author_line(author: &Author) -> Option<String> {
    author.display_name().map(|name| format!("By {}", name))
}

/// Description embedded in document metadata
pub fn export_description(project_type: ProjectType) -> String {
    format!("{} project export from GospelWise Author App", project_type.as_str())
}
