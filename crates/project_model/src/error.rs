//! Error types for loading project records

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed project JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectModelError>;
