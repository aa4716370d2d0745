/// Raw file entries as supplied by an ingestion source.
///
/// An entry carries only metadata that is already known without opening
/// the file: its display name, byte size, timestamps and the relative path
/// rooted at the selected directory (e.g. `photos/2024/beach.jpg`).
use chrono::{DateTime, Utc};

/// One file handed over by an ingestion source (scanner or caller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name including extension.
    pub name: String,
    /// Logical size in bytes.
    pub size: u64,
    /// Last-modified instant.
    pub last_modified: DateTime<Utc>,
    /// Forward-slash separated path rooted at the selected directory.
    /// Equal to `name` when the source has no folder information.
    pub relative_path: String,
    /// MIME type reported by the source, if any (e.g. `text/plain`).
    pub mime_type: Option<String>,
    /// Creation instant, when the source can provide one.
    pub created: Option<DateTime<Utc>>,
}

impl FileEntry {
    /// Create a top-level entry whose relative path is just its name.
    pub fn new(name: impl Into<String>, size: u64, last_modified: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            relative_path: name.clone(),
            name,
            size,
            last_modified,
            mime_type: None,
            created: None,
        }
    }

    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = path.into();
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
