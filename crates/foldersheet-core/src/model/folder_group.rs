/// Folder groups — one bucket of files per group key.
use super::file_record::FileRecord;
use serde::Serialize;

/// Key and display name used for files with no folder component.
pub const ROOT_SENTINEL: &str = "Root";

/// One grouping bucket. Becomes one sheet in the exported workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderGroup {
    /// Last segment of `path`, or [`ROOT_SENTINEL`].
    pub folder_name: String,
    /// The group key: a full directory path or a top-level folder name.
    pub path: String,
    /// Files sorted ascending by name under locale collation.
    pub files: Vec<FileRecord>,
}

impl FolderGroup {
    /// Number of `/`-separated segments in the group key.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }

    /// Sum of the sizes of every file in the group.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Totals over a whole group collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingSummary {
    pub total_files: u64,
    pub total_folders: u64,
    pub total_size: u64,
}

/// Compute file, folder and byte totals for a group collection.
pub fn summarize(groups: &[FolderGroup]) -> GroupingSummary {
    groups
        .iter()
        .fold(GroupingSummary::default(), |mut acc, group| {
            acc.total_files += group.files.len() as u64;
            acc.total_folders += 1;
            acc.total_size += group.total_size();
            acc
        })
}
