/// Ingested file records — the immutable unit the grouper works on.
///
/// The core fields are always present. Optional metadata that only some
/// sources can provide lives in a sparse attribute map so new optional
/// fields do not widen the record itself.
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::Serialize;
use std::collections::BTreeMap;

/// Identifier of an optional record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordAttribute {
    CreatedDate,
    IsSystem,
    Author,
}

/// Value stored for an optional attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Instant(DateTime<Utc>),
    Flag(bool),
    Text(String),
}

/// One file, as produced by [`crate::ingest::ingest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Leaf file name including extension.
    pub name: CompactString,

    /// Category label: the extension, a MIME subtype, or `"file"`.
    #[serde(rename = "type")]
    pub kind: CompactString,

    /// Logical size in bytes.
    pub size: u64,

    pub last_modified: DateTime<Utc>,

    /// Full relative path, forward-slash separated. Always ends with `name`.
    pub path: String,

    /// Lowercased extension with its leading dot, or empty.
    pub extension: CompactString,

    /// `true` when the name starts with a dot.
    pub is_hidden: bool,

    /// Optional metadata keyed by attribute; absent keys mean "unknown".
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<RecordAttribute, AttributeValue>,
}

impl FileRecord {
    /// Creation instant, if the source supplied one.
    pub fn created_date(&self) -> Option<&DateTime<Utc>> {
        match self.attributes.get(&RecordAttribute::CreatedDate) {
            Some(AttributeValue::Instant(at)) => Some(at),
            _ => None,
        }
    }

    /// Number of `/`-separated segments in `path`.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }
}
