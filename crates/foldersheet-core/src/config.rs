/// Export options and their optional TOML config file.
///
/// Every key is optional; anything not set falls back to the defaults
/// below and can still be overridden on the command line.
///
/// ```toml
/// include_subfolders = false
/// extra_fields = ["extension", "path"]
/// language = "es"
/// output_dir = "exports"
/// ```
use crate::export::Language;
use crate::model::ExtraFieldSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Options that control grouping and export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    /// Group by every subfolder (`true`) or by top-level folder only.
    pub include_subfolders: bool,
    /// Extra columns appended to every sheet.
    pub extra_fields: ExtraFieldSet,
    pub language: Language,
    /// Directory the workbook is written to.
    pub output_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_subfolders: true,
            extra_fields: ExtraFieldSet::new(),
            language: Language::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExportOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
