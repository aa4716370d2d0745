/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the session via a crossbeam channel.
use std::time::Duration;

/// Progress updates sent from the scan thread.
///
/// The collected entries live in the shared `LiveEntries`; these messages
/// carry only counters and status flags.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        dirs_found: u64,
        total_size: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. permission denied on one file).
    Error { path: String, message: String },
    /// Scanning completed. Every entry is in the shared `LiveEntries`.
    Complete {
        duration: Duration,
        error_count: u64,
    },
    /// Scan was cancelled by the user.
    Cancelled,
}
