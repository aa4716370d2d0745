/// Session state — everything a front end keeps between user actions.
///
/// Holds the full ingested record set so that toggling the grouping mode
/// only re-groups and never re-scans. The scan thread communicates via a
/// channel; state updates happen in [`FolderSession::process_scan_messages`]
/// (non-blocking) or [`FolderSession::wait_for_scan`] (blocking).
use crate::config::ExportOptions;
use crate::export::{ExportError, WorkbookExporter};
use crate::grouping::group;
use crate::ingest::ingest;
use crate::model::{summarize, ExtraField, ExtraFieldSet, FileEntry, FileRecord, FolderGroup, GroupingSummary};
use crate::scanner::progress::ScanProgress;
use crate::scanner::{start_scan, LiveEntries, ScanHandle};
use crossbeam_channel::TryRecvError;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing selected yet.
    Idle,
    /// A scan is running.
    Scanning,
    /// Records are loaded and grouped.
    Ready,
}

/// Maximum number of scan-progress messages drained per
/// [`FolderSession::process_scan_messages`] call.
const MAX_MESSAGES_PER_CALL: usize = 300;

/// Maximum number of per-entry scan errors kept for display. The count in
/// `scan_error_count` keeps going past this.
pub const MAX_SCAN_ERRORS: usize = 1_000;

pub struct FolderSession {
    // ── Scan ───────────────────────────────────────────
    pub phase: SessionPhase,
    scan_handle: Option<ScanHandle>,
    pub scan_files_found: u64,
    pub scan_dirs_found: u64,
    pub scan_error_count: u64,
    pub scan_duration: Option<Duration>,
    /// True if the most recent scan was cancelled (partial results).
    pub scan_was_cancelled: bool,
    pub scan_errors: Vec<(String, String)>,

    // ── Results ────────────────────────────────────────
    root_name: Option<String>,
    /// Every ingested record, independent of the grouping mode.
    records: Vec<FileRecord>,
    /// Groups computed from `records` under the current mode.
    groups: Vec<FolderGroup>,

    // ── Options ────────────────────────────────────────
    include_subfolders: bool,
    extra_fields: ExtraFieldSet,
}

impl Default for FolderSession {
    fn default() -> Self {
        Self::new(true, ExtraFieldSet::new())
    }
}

impl FolderSession {
    pub fn new(include_subfolders: bool, extra_fields: ExtraFieldSet) -> Self {
        Self {
            phase: SessionPhase::Idle,
            scan_handle: None,
            scan_files_found: 0,
            scan_dirs_found: 0,
            scan_error_count: 0,
            scan_duration: None,
            scan_was_cancelled: false,
            scan_errors: Vec::new(),
            root_name: None,
            records: Vec::new(),
            groups: Vec::new(),
            include_subfolders,
            extra_fields,
        }
    }

    /// Create a session using the grouping and column options from `options`.
    pub fn from_options(options: &ExportOptions) -> Self {
        Self::new(options.include_subfolders, options.extra_fields.clone())
    }

    // ── Scanning ───────────────────────────────────────

    /// Start scanning `path`. Previous results are discarded.
    pub fn start_scan(&mut self, path: PathBuf) -> std::io::Result<()> {
        self.cancel_scan();
        self.phase = SessionPhase::Scanning;
        self.scan_files_found = 0;
        self.scan_dirs_found = 0;
        self.scan_error_count = 0;
        self.scan_duration = None;
        self.scan_was_cancelled = false;
        self.scan_errors.clear();
        self.records.clear();
        self.groups.clear();

        match start_scan(path) {
            Ok(handle) => {
                self.root_name = Some(handle.root_name.clone());
                self.scan_handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.phase = SessionPhase::Idle;
                self.root_name = None;
                Err(e)
            }
        }
    }

    /// Cancel any running scan.
    pub fn cancel_scan(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
    }

    /// Drain pending scan messages without blocking.
    ///
    /// Returns `true` if anything changed. Capped at
    /// [`MAX_MESSAGES_PER_CALL`] messages so a large backlog cannot stall
    /// the caller.
    pub fn process_scan_messages(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGES_PER_CALL {
            let msg = match self.scan_handle.as_ref().map(|h| h.progress_rx.try_recv()) {
                Some(Ok(m)) => m,
                Some(Err(TryRecvError::Disconnected)) => {
                    // Scan thread went away without a terminal message.
                    self.finish_scan();
                    return true;
                }
                Some(Err(TryRecvError::Empty)) | None => break,
            };
            changed = true;
            if self.apply_progress(msg) {
                break;
            }
        }
        changed
    }

    /// Block until the running scan finishes, applying every message.
    ///
    /// Returns immediately if no scan is running.
    pub fn wait_for_scan(&mut self) {
        loop {
            let msg = match self.scan_handle.as_ref().map(|h| h.progress_rx.recv()) {
                Some(Ok(m)) => m,
                Some(Err(_)) => {
                    // Scan thread went away without a terminal message.
                    self.finish_scan();
                    return;
                }
                None => return,
            };
            if self.apply_progress(msg) {
                return;
            }
        }
    }

    /// Apply one progress message. Returns `true` for terminal messages.
    fn apply_progress(&mut self, msg: ScanProgress) -> bool {
        match msg {
            ScanProgress::Update {
                files_found,
                dirs_found,
                total_size,
                current_path,
            } => {
                debug!(
                    "Scan progress: {files_found} files, {dirs_found} dirs, {total_size} bytes, at {current_path}"
                );
                self.scan_files_found = files_found;
                self.scan_dirs_found = dirs_found;
                false
            }
            ScanProgress::Error { path, message } => {
                self.scan_error_count += 1;
                if self.scan_errors.len() < MAX_SCAN_ERRORS {
                    self.scan_errors.push((path, message));
                }
                false
            }
            ScanProgress::Complete {
                duration,
                error_count,
            } => {
                self.scan_error_count = error_count;
                self.scan_duration = Some(duration);
                self.finish_scan();
                true
            }
            ScanProgress::Cancelled => {
                self.scan_was_cancelled = true;
                // Preserve whatever has been scanned so far.
                self.finish_scan();
                true
            }
        }
    }

    /// Take ownership of the collected entries and ingest them.
    fn finish_scan(&mut self) {
        let Some(handle) = self.scan_handle.take() else {
            return;
        };
        let entries = take_entries(handle.live_entries);
        let root_name = handle.root_name;

        info!(
            "Scan of {} finished with {} files ({} errors)",
            root_name,
            entries.len(),
            self.scan_error_count
        );
        self.load_entries(root_name, &entries);
    }

    // ── Ingestion & grouping ───────────────────────────

    /// Ingest entries from any source and group them.
    ///
    /// `root_name` is the display name of the selected directory; it names
    /// the exported workbook.
    pub fn load_entries(&mut self, root_name: impl Into<String>, entries: &[FileEntry]) {
        self.root_name = Some(root_name.into());
        self.records = ingest(entries);
        self.scan_files_found = self.records.len() as u64;
        self.regroup();
        self.phase = SessionPhase::Ready;
    }

    /// Switch grouping granularity. Re-groups the retained records; no
    /// re-ingestion happens.
    pub fn set_include_subfolders(&mut self, include_subfolders: bool) {
        if self.include_subfolders == include_subfolders {
            return;
        }
        self.include_subfolders = include_subfolders;
        self.regroup();
    }

    /// Add `field` if it is not selected, remove it otherwise.
    pub fn toggle_extra_field(&mut self, field: ExtraField) {
        if !self.extra_fields.remove(&field) {
            self.extra_fields.insert(field);
        }
    }

    fn regroup(&mut self) {
        self.groups = group(&self.records, self.include_subfolders);
    }

    // ── Accessors ──────────────────────────────────────

    pub fn root_name(&self) -> Option<&str> {
        self.root_name.as_deref()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn groups(&self) -> &[FolderGroup] {
        &self.groups
    }

    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    pub fn extra_fields(&self) -> &ExtraFieldSet {
        &self.extra_fields
    }

    /// Totals over the current groups. `None` until something is loaded.
    pub fn summary(&self) -> Option<GroupingSummary> {
        (self.phase == SessionPhase::Ready && !self.groups.is_empty())
            .then(|| summarize(&self.groups))
    }

    // ── Export ─────────────────────────────────────────

    /// Export the current groups. State is left untouched on failure so
    /// the export can be retried.
    pub fn export(&self, exporter: &WorkbookExporter) -> Result<PathBuf, ExportError> {
        let root_name = match self.root_name.as_deref() {
            Some(name) if !self.groups.is_empty() => name,
            _ => return Err(ExportError::NothingToExport),
        };
        exporter.export(&self.groups, &self.extra_fields, root_name)
    }
}

/// Take the entries out of the shared vec, cloning only if the scan thread
/// still holds a reference.
fn take_entries(live: LiveEntries) -> Vec<FileEntry> {
    Arc::try_unwrap(live)
        .map(RwLock::into_inner)
        .unwrap_or_else(|arc| arc.read().clone())
}

/// Convenience: scan `path` to completion and return the ready session.
pub fn scan_blocking(path: &Path, options: &ExportOptions) -> std::io::Result<FolderSession> {
    let mut session = FolderSession::from_options(options);
    session.start_scan(path.to_path_buf())?;
    session.wait_for_scan();
    Ok(session)
}
