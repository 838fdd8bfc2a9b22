//! Save targets for finished artifacts

use crate::error::{ExportError, ExportResult};
use std::path::PathBuf;
use std::sync::Mutex;

/// Receives a finished artifact exactly once per successful export.
///
/// Returns the name the artifact was actually stored under, which may differ
/// from the requested one when the target has to sanitize it.
pub trait SaveTarget {
    fn save(&self, bytes: &[u8], filename: &str) -> ExportResult<String>;
}

impl<T: SaveTarget + ?Sized> SaveTarget for &T {
    fn save(&self, bytes: &[u8], filename: &str) -> ExportResult<String> {
        (**self).save(bytes, filename)
    }
}

/// Writes artifacts into a directory
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// `filename` with path separators and NUL replaced by `_`, so the file
/// stays inside the target directory
pub fn safe_filename(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    match safe.as_str() {
        "." | ".." => safe.replace('.', "_"),
        _ => safe,
    }
}

impl SaveTarget for DirectorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> ExportResult<String> {
        let stored = safe_filename(filename);
        let path = self.dir.join(&stored);
        let io_err = |source| ExportError::Save {
            filename: filename.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(&path, bytes).map_err(io_err)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved export");
        Ok(stored)
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Default)]
pub struct MemorySaver {
    artifacts: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved (filename, bytes) pairs in save order
    pub fn artifacts(&self) -> Vec<(String, Vec<u8>)> {
        self.lock().clone()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, Vec<u8>)>> {
        self.artifacts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SaveTarget for MemorySaver {
    fn save(&self, bytes: &[u8], filename: &str) -> ExportResult<String> {
        self.lock().push((filename.to_string(), bytes.to_vec()));
        Ok(filename.to_string())
    }
}
