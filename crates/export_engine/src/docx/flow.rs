//! Flow document construction
//!
//! Turns the content plan into the block sequence Word will lay out.

use crate::branding::{
    author_line, cover_subtitle, display_title, export_description, BRANDING_TEXT, DEFAULT_CREATOR,
};
use crate::plan::{ContentPlan, Section, SectionContent};
use project_model::{Author, Project};

/// One block of a flow document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowBlock {
    /// Cover title
    Title(String),
    /// "{type} Project" under the title
    Subtitle(String),
    /// "By {name}"
    Author(String),
    /// Part heading such as "Characters"
    PartHeading(String),
    /// Section title
    Heading(String),
    /// "{label}:" above a group field value
    SubHeading(String),
    Paragraph(String),
    PageBreak,
}

impl FlowBlock {
    pub fn text(&self) -> Option<&str> {
        match self {
            FlowBlock::Title(t)
            | FlowBlock::Subtitle(t)
            | FlowBlock::Author(t)
            | FlowBlock::PartHeading(t)
            | FlowBlock::Heading(t)
            | FlowBlock::SubHeading(t)
            | FlowBlock::Paragraph(t) => Some(t),
            FlowBlock::PageBreak => None,
        }
    }
}

/// Core document properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub creator: String,
    pub title: String,
    pub description: String,
}

/// A reflowable document: metadata, body blocks and a footer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDocument {
    pub metadata: DocumentMetadata,
    pub blocks: Vec<FlowBlock>,
    /// Footer text repeated on every page
    pub footer: String,
}

impl FlowDocument {
    /// Text of every block that has any, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(FlowBlock::text)
    }

    /// Section headings in order
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                FlowBlock::Heading(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Build the flow document for a project.
///
/// Cover blocks come first, then a page break, then each part of the plan.
/// Parts after the first and sections flagged for a forced break start on a
/// new page.
pub fn build_flow_document(project: &Project, author: &Author) -> FlowDocument {
    let plan = ContentPlan::for_project(project);
    let mut builder = FlowBuilder::default();

    builder.push(FlowBlock::Title(display_title(project.title.as_deref()).to_string()));
    builder.push(FlowBlock::Subtitle(cover_subtitle(project.project_type)));
    if let Some(line) = author_line(author) {
        builder.push(FlowBlock::Author(line));
    }
    builder.page_break();

    for (index, part) in plan.parts.iter().enumerate() {
        if index > 0 {
            builder.page_break();
        }
        builder.push(FlowBlock::PartHeading(part.heading.clone()));
        for section in &part.sections {
            builder.section(section);
        }
    }

    let document = FlowDocument {
        metadata: DocumentMetadata {
            creator: author
                .display_name()
                .unwrap_or(DEFAULT_CREATOR)
                .to_string(),
            title: display_title(project.title.as_deref()).to_string(),
            description: export_description(project.project_type),
        },
        blocks: builder.blocks,
        footer: BRANDING_TEXT.to_string(),
    };
    tracing::debug!(blocks = document.blocks.len(), "built flow document");
    document
}

#[derive(Default)]
struct FlowBuilder {
    blocks: Vec<FlowBlock>,
}

impl FlowBuilder {
    fn push(&mut self, block: FlowBlock) {
        self.blocks.push(block);
    }

    /// A break is dropped when it would follow another break or leave a
    /// part heading alone at the bottom of a page.
    fn page_break(&mut self) {
        match self.blocks.last() {
            None | Some(FlowBlock::PageBreak) | Some(FlowBlock::PartHeading(_)) => {}
            Some(_) => self.blocks.push(FlowBlock::PageBreak),
        }
    }

    fn section(&mut self, section: &Section) {
        if section.force_page_break_before {
            self.page_break();
        }
        self.push(FlowBlock::Heading(section.title.clone()));
        match &section.content {
            SectionContent::Text(text) => self.push(FlowBlock::Paragraph(text.clone())),
            SectionContent::Group(fields) => {
                for field in fields {
                    self.push(FlowBlock::SubHeading(format!("{}:", field.label)));
                    self.push(FlowBlock::Paragraph(field.value.clone()));
                }
            }
        }
    }
}
