/// Grouper — buckets file records into ordered folder groups.
///
/// Two granularities are supported:
///
/// - **Subfolders** (`include_subfolders = true`): every distinct parent
///   directory path becomes its own group, at any depth.
/// - **Top level only** (`include_subfolders = false`): files directly
///   inside a top-level folder are grouped by that folder; anything nested
///   deeper is left out.
///
/// Files with no folder component in their path land in the
/// [`ROOT_SENTINEL`] group in both modes.
///
/// Grouping is a pure function of its inputs. Callers keep the full record
/// set and call [`group`] again whenever the mode changes.
pub mod collation;

use crate::model::{FileRecord, FolderGroup, ROOT_SENTINEL};
use collation::LocaleCollator;
use std::collections::HashMap;
use tracing::debug;

/// Compute the group key for a relative path, or `None` if the record is
/// excluded under the given mode.
pub fn group_key(path: &str, include_subfolders: bool) -> Option<String> {
    match path.rsplit_once('/') {
        None => Some(ROOT_SENTINEL.to_string()),
        Some((dir, _)) if include_subfolders => Some(dir.to_string()),
        Some((dir, _)) if !dir.contains('/') => Some(dir.to_string()),
        Some(_) => None,
    }
}

/// Display name for a group key: its last segment, or the whole key when
/// that segment is empty (e.g. a key ending in `/`).
pub fn folder_name_for(key: &str) -> String {
    key.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(key)
        .to_string()
}

/// Partition `records` into folder groups.
///
/// Files within a group are sorted by name; groups are sorted by depth
/// (shallowest first) and then by path, both under locale collation.
pub fn group(records: &[FileRecord], include_subfolders: bool) -> Vec<FolderGroup> {
    let buckets = records.iter().fold(
        HashMap::<String, Vec<FileRecord>>::new(),
        |mut acc, record| {
            if let Some(key) = group_key(&record.path, include_subfolders) {
                acc.entry(key).or_default().push(record.clone());
            }
            acc
        },
    );

    let mut collator = LocaleCollator::new();

    let mut groups: Vec<FolderGroup> = buckets
        .into_iter()
        .map(|(path, mut files)| {
            files.sort_by(|a, b| collator.compare(&a.name, &b.name));
            FolderGroup {
                folder_name: folder_name_for(&path),
                path,
                files,
            }
        })
        .collect();

    groups.sort_by(|a, b| {
        a.depth()
            .cmp(&b.depth())
            .then_with(|| collator.compare(&a.path, &b.path))
    });

    debug!(
        "Grouped {} records into {} groups (include_subfolders = {})",
        records.len(),
        groups.len(),
        include_subfolders
    );

    groups
}
