/// Scanner — the ingestion source for a chosen directory.
///
/// Walks the directory on a background thread and collects one
/// [`FileEntry`] per file, with relative paths rooted at the directory's
/// own name (`photos/2024/beach.jpg` when scanning `photos`). Only
/// metadata is read; file contents are never opened.
///
/// Entries are written into a **shared `LiveEntries`**
/// (`Arc<RwLock<Vec<FileEntry>>>`) in batches so a caller can show a
/// running count while the walk is in progress.
pub mod progress;
pub mod walk;

use crate::model::FileEntry;
use progress::ScanProgress;

use crossbeam_channel::Receiver;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::info;

/// Entries collected so far, shared between the scan thread and its owner.
pub type LiveEntries = Arc<RwLock<Vec<FileEntry>>>;

/// Maximum number of progress messages that may queue up in the channel.
///
/// If the receiver falls behind, the scanner stalls briefly on `send`
/// rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Entries collected so far.
    pub live_entries: LiveEntries,
    /// Display name of the scanned directory; first segment of every
    /// relative path.
    pub root_name: String,
    cancel_flag: Arc<AtomicBool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// A handle with no scan thread behind it; the test drives the channel.
    #[cfg(test)]
    pub(crate) fn detached(
        progress_rx: Receiver<ScanProgress>,
        live_entries: LiveEntries,
        root_name: impl Into<String>,
    ) -> Self {
        Self {
            progress_rx,
            live_entries,
            root_name: root_name.into(),
            cancel_flag: Arc::new(AtomicBool::new(false)),
            _thread: None,
        }
    }
}

/// Start a new scan of `root_path` on a background thread.
///
/// Fails only if the thread cannot be spawned; problems reading individual
/// entries are reported as [`ScanProgress::Error`] messages.
pub fn start_scan(root_path: PathBuf) -> std::io::Result<ScanHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let live_entries: LiveEntries = Arc::new(RwLock::new(Vec::with_capacity(4_096)));
    let entries_clone = live_entries.clone();
    let root_name = walk::root_display_name(&root_path);

    let thread = thread::Builder::new()
        .name("foldersheet-scanner".into())
        .spawn(move || {
            info!("Starting scan of {}", root_path.display());
            walk::scan_directory(root_path, progress_tx, cancel_clone, entries_clone);
        })?;

    Ok(ScanHandle {
        progress_rx,
        live_entries,
        root_name,
        cancel_flag,
        _thread: Some(thread),
    })
}
