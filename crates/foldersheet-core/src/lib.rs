/// FolderSheet Core — ingestion, grouping, export and data model.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI).
///
/// # Modules
///
/// - [`model`] — File entries, records, folder groups and display formatting.
/// - [`ingest`] — Turns raw entries into file records.
/// - [`grouping`] — Buckets records into ordered folder groups.
/// - [`export`] — Writes folder groups to a multi-sheet `.xlsx` workbook.
/// - [`scanner`] — Background directory walk that supplies file entries.
/// - [`session`] — Caller-held state: records, groups, options, scan lifecycle.
/// - [`config`] — Export options and their TOML config file.
pub mod config;
pub mod export;
pub mod grouping;
pub mod ingest;
pub mod model;
pub mod scanner;
pub mod session;

pub use config::{ConfigError, ExportOptions};
pub use export::{ExportError, Language, WorkbookExporter};
pub use grouping::group;
pub use ingest::ingest;
pub use model::{ExtraField, ExtraFieldSet, FileEntry, FileRecord, FolderGroup, GroupingSummary};
pub use session::{FolderSession, SessionPhase};
