/// Data model for FolderSheet.
///
/// Raw entries from an ingestion source, the records derived from them,
/// the folder groups they are bucketed into, and display formatting.
pub mod extra_field;
pub mod file_entry;
pub mod file_record;
pub mod folder_group;
pub mod size;
pub mod timestamp;

pub use extra_field::{ExtraField, ExtraFieldSet, UnknownExtraField};
pub use file_entry::FileEntry;
pub use file_record::{AttributeValue, FileRecord, RecordAttribute};
pub use folder_group::{summarize, FolderGroup, GroupingSummary, ROOT_SENTINEL};
