//! Content Plan
//!
//! A format-agnostic description of what an export contains. The plan owns
//! every decision about section order, placeholder text, group omission and
//! forced page breaks, so the PDF and Word renderers only have to draw it.
//!
//! Sections are collected into parts that mirror the planner tabs
//! ("Story Concept", "Characters", ...). Every part after the first starts
//! on a new page.

mod fiction;
mod nonfiction;

use crate::branding::{format_label, is_present, text_or_placeholder};
use project_model::{Project, ProjectType};

/// Shape of a section's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// A single paragraph
    Text,
    /// Label/value rows
    LabeledGroup,
}

/// One present sub-field of a labeled group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupField {
    /// camelCase source key
    pub key: &'static str,
    /// Humanized label derived from the key
    pub label: String,
    pub value: String,
}

/// Body of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Paragraph text, already substituted with the placeholder when empty
    Text(String),
    /// Present sub-fields only, in declaration order; never empty
    Group(Vec<GroupField>),
}

/// One titled unit of exported content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: SectionContent,
    pub force_page_break_before: bool,
}

impl Section {
    /// A text section; always emitted, with "Not provided" for empty input
    pub fn text(title: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::Text(text_or_placeholder(value)),
            force_page_break_before: false,
        }
    }

    /// A labeled group, or `None` when every sub-field is empty
    pub fn group(title: impl Into<String>, fields: &[(&'static str, Option<&str>)]) -> Option<Self> {
        let present: Vec<GroupField> = fields
            .iter()
            .filter(|(_, value)| is_present(*value))
            .map(|(key, value)| GroupField {
                key: *key,
                label: format_label(key),
                value: value.unwrap_or_default().to_string(),
            })
            .collect();

        if present.is_empty() {
            return None;
        }

        Some(Self {
            title: title.into(),
            content: SectionContent::Group(present),
            force_page_break_before: false,
        })
    }

    /// Mark this section as starting on a fresh page
    pub fn with_page_break(mut self) -> Self {
        self.force_page_break_before = true;
        self
    }

    pub fn kind(&self) -> SectionKind {
        match self.content {
            SectionContent::Text(_) => SectionKind::Text,
            SectionContent::Group(_) => SectionKind::LabeledGroup,
        }
    }
}

/// A run of sections under one heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub heading: String,
    pub sections: Vec<Section>,
}

impl Part {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            sections: Vec::new(),
        }
    }

    fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    fn push_opt(&mut self, section: Option<Section>) {
        if let Some(section) = section {
            self.sections.push(section);
        }
    }
}

/// The ordered, format-agnostic content of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPlan {
    pub project_type: ProjectType,
    pub parts: Vec<Part>,
}

impl ContentPlan {
    /// Build the plan for a project. Depends only on the project, never on
    /// the author, and is deterministic for a given input.
    pub fn for_project(project: &Project) -> Self {
        let parts = match project.project_type {
            ProjectType::Fiction => fiction::parts(project),
            ProjectType::Nonfiction => nonfiction::parts(project),
        };

        let plan = Self {
            project_type: project.project_type,
            parts,
        };
        tracing::debug!(
            project_type = %plan.project_type,
            sections = plan.sections().count(),
            "built content plan"
        );
        plan
    }

    /// All sections in export order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.parts.iter().flat_map(|part| part.sections.iter())
    }

    /// Section titles in export order
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections().map(|s| s.title.as_str()).collect()
    }

    /// Find a section by title
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections().find(|s| s.title == title)
    }
}

/// Within a nine-movement run, every third movement after the first group
/// starts a new page (before movements 4 and 7).
pub fn breaks_before_movement(index: usize) -> bool {
    index > 0 && index % 3 == 0
}

/// Text sections for a nine-movement structure
fn movement_sections(titles: &[&str; 9], values: [Option<&str>; 9]) -> Vec<Section> {
    titles
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (title, value))| {
            let section = Section::text(format!("Movement {}: {}", index + 1, title), value);
            if breaks_before_movement(index) {
                section.with_page_break()
            } else {
                section
            }
        })
        .collect()
}
