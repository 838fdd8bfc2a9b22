//! Error types for DOCX packaging

use thiserror::Error;

/// Errors that can occur while packaging a flow document
#[derive(Debug, Error)]
pub enum DocxError {
    /// IO error while writing the archive
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A part was written without a declared content type
    #[error("Invalid content type: no content type declared for {0}")]
    InvalidContentType(String),

    /// Style settings that cannot be written
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
