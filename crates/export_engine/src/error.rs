//! Error types for export operations

use thiserror::Error;

/// Why an export did not produce a saved artifact
#[derive(Debug, Error)]
pub enum ExportError {
    /// The layout or drawing step rejected the input (RenderFailure)
    #[error("Render failure: {0}")]
    Render(String),

    /// Packaging the flow document into bytes failed (SerializationFailure)
    #[error("Serialization failure: {0}")]
    Serialization(String),

    /// The finished artifact could not be handed to the save target
    #[error("Save failed for {filename}: {source}")]
    Save {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn serialization(message: impl Into<String>) -> Self {
        ExportError::Serialization(message.into())
    }
}

impl From<crate::pdf::PdfError> for ExportError {
    fn from(err: crate::pdf::PdfError) -> Self {
        ExportError::Render(err.to_string())
    }
}

impl From<crate::docx::DocxError> for ExportError {
    fn from(err: crate::docx::DocxError) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ExportError {
    fn from(err: tokio::task::JoinError) -> Self {
        ExportError::Serialization(format!("Packaging task did not complete: {}", err))
    }
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
