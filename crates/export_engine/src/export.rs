//! Export orchestration
//!
//! [`Exporter`] is the single entry point: it renders the requested format,
//! hands the finished bytes to a [`SaveTarget`] and converts any failure
//! into an [`ExportOutcome::Error`]. Nothing is saved unless rendering
//! completed, and a failed export is never retried here.

use crate::branding::export_filename;
use crate::docx::{build_flow_document, DocxPacker, FlowDocument};
use crate::error::{ExportError, ExportResult};
use crate::pdf::render_pdf;
use crate::save::SaveTarget;
use crate::settings::ExportSettings;
use project_model::{Author, Project};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Word,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Word => write!(f, "word"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "word" | "docx" => Ok(ExportFormat::Word),
            other => Err(format!("unknown export format '{}' (expected pdf or word)", other)),
        }
    }
}

/// Caller-visible result of one export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportOutcome {
    Success { filename: String },
    Error { message: String },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Success { .. })
    }
}

/// Turns a flow document into bytes. This is the only asynchronous step of
/// a Word export.
pub trait Packer {
    fn pack(&self, document: FlowDocument) -> impl Future<Output = ExportResult<Vec<u8>>> + Send;
}

/// Runs exports against a save target
pub struct Exporter<S, P = DocxPacker> {
    saver: S,
    packer: P,
    settings: ExportSettings,
}

impl<S: SaveTarget> Exporter<S, DocxPacker> {
    /// An exporter packaging Word documents with the configured style
    pub fn new(saver: S, settings: ExportSettings) -> Self {
        let packer = DocxPacker::new(settings.docx.clone());
        Self {
            saver,
            packer,
            settings,
        }
    }
}

impl<S: SaveTarget, P: Packer> Exporter<S, P> {
    pub fn with_packer(saver: S, packer: P, settings: ExportSettings) -> Self {
        Self {
            saver,
            packer,
            settings,
        }
    }

    pub fn saver(&self) -> &S {
        &self.saver
    }

    /// Render and save a PDF. Synchronous; returns the saved filename.
    pub fn export_to_pdf(&self, project: &Project, author: &Author) -> ExportResult<String> {
        let bytes = render_pdf(project, author, &self.settings.pdf)?;
        self.save(bytes, project, ExportFormat::Pdf)
    }

    /// Build, package and save a Word document; returns the saved filename.
    /// Packaging failures are reported before anything is saved.
    pub async fn export_to_word(&self, project: &Project, author: &Author) -> ExportResult<String> {
        let document = build_flow_document(project, author);
        let bytes = self.packer.pack(document).await?;
        self.save(bytes, project, ExportFormat::Word)
    }

    /// Run one export and report its outcome
    pub async fn export(&self, project: &Project, author: &Author, format: ExportFormat) -> ExportOutcome {
        let result = match format {
            ExportFormat::Pdf => self.export_to_pdf(project, author),
            ExportFormat::Word => self.export_to_word(project, author).await,
        };

        match result {
            Ok(filename) => {
                tracing::info!(%format, %filename, "export completed");
                ExportOutcome::Success { filename }
            }
            Err(err) => {
                tracing::error!(%format, error = %err, "export failed");
                err.into()
            }
        }
    }

    fn save(&self, bytes: Vec<u8>, project: &Project, format: ExportFormat) -> ExportResult<String> {
        let filename = export_filename(project.title.as_deref(), format);
        self.saver.save(&bytes, &filename)
    }
}

impl From<ExportError> for ExportOutcome {
    fn from(err: ExportError) -> Self {
        ExportOutcome::Error {
            message: err.to_string(),
        }
    }
}
