//! PDF Export API

use super::document::DocumentInfo;
use super::encoding::WinAnsiEncoder;
use super::layout::{compose, CoverPage};
use super::options::PdfLayout;
use super::writer::PdfDocumentWriter;
use crate::branding::{author_line, cover_subtitle, display_title, export_description, DEFAULT_CREATOR};
use crate::error::ExportResult;
use crate::plan::ContentPlan;
use chrono::{DateTime, FixedOffset, Local};
use project_model::{Author, Project};

/// Cover text for a project
pub fn cover_page(project: &Project, author: &Author) -> CoverPage {
    CoverPage {
        title: display_title(project.title.as_deref()).to_string(),
        subtitle: cover_subtitle(project.project_type),
        author_line: author_line(author),
    }
}

/// Info dictionary entries for a project
pub fn document_info(project: &Project, author: &Author, creation_date: DateTime<FixedOffset>) -> DocumentInfo {
    let mut info = DocumentInfo::new();
    info.title = Some(display_title(project.title.as_deref()).to_string());
    info.author = author.display_name().map(str::to_string);
    info.subject = Some(export_description(project.project_type));
    info.creator = Some(DEFAULT_CREATOR.to_string());
    info.creation_date = Some(creation_date);
    info
}

/// Render a complete PDF export of `project` in memory.
///
/// Synchronous; any layout or encoding failure is a render failure and no
/// bytes are returned.
pub fn render_pdf(project: &Project, author: &Author, layout: &PdfLayout) -> ExportResult<Vec<u8>> {
    let plan = ContentPlan::for_project(project);
    let pages = compose(&plan, &cover_page(project, author), layout)?;

    let creation_date = layout
        .creation_date
        .unwrap_or_else(|| Local::now().fixed_offset());
    let writer = PdfDocumentWriter::new(
        document_info(project, author, creation_date),
        WinAnsiEncoder::new(layout.strict_encoding),
        layout.compress,
    );
    let bytes = writer.write_to_bytes(&pages)?;

    tracing::debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF");
    Ok(bytes)
}
