//! Asynchronous DOCX packaging

use super::flow::FlowDocument;
use super::style::DocxStyle;
use super::writer::pack_to_bytes;
use crate::error::ExportResult;
use crate::export::Packer;
use std::future::Future;

/// Packages flow documents as DOCX on the blocking thread pool
#[derive(Debug, Clone, Default)]
pub struct DocxPacker {
    style: DocxStyle,
}

impl DocxPacker {
    pub fn new(style: DocxStyle) -> Self {
        Self { style }
    }
}

impl Packer for DocxPacker {
    fn pack(&self, document: FlowDocument) -> impl Future<Output = ExportResult<Vec<u8>>> + Send {
        pack_blocking(document, self.style.clone())
    }
}

/// A failed zip write and a panicked packaging task both surface as
/// serialization failures.
async fn pack_blocking(document: FlowDocument, style: DocxStyle) -> ExportResult<Vec<u8>> {
    let bytes = tokio::task::spawn_blocking(move || pack_to_bytes(&document, &style)).await??;
    tracing::debug!(bytes = bytes.len(), "packed DOCX");
    Ok(bytes)
}
