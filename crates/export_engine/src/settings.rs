//! Export settings
//!
//! Layout and style knobs for both formats, loadable from a JSON file.

use crate::docx::DocxStyle;
use crate::pdf::PdfLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for both export formats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    pub pdf: PdfLayout,
    pub docx: DocxStyle,
}

impl ExportSettings {
    /// Load settings from a JSON file. A missing file yields the defaults;
    /// so does a file that does not parse, with a warning.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<ExportSettings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse settings file {}, using defaults: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save settings as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, content)
    }
}
