/// Parallel directory walker using `jwalk`.
///
/// Works on any filesystem and needs no special privileges. `jwalk`'s
/// rayon-backed traversal reads directories in parallel; this thread only
/// stats files and builds entries.
///
/// # Lock-contention mitigation
///
/// Entries are accumulated in a local `Vec<FileEntry>` and flushed to the
/// shared `LiveEntries` under a **single write lock per batch** of
/// [`BATCH_SIZE`] rather than one lock per file.
use crate::model::timestamp::from_system_time;
use crate::model::FileEntry;
use crate::scanner::progress::ScanProgress;
use crate::scanner::LiveEntries;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Number of entries to accumulate locally before flushing to the shared
/// `LiveEntries`.
const BATCH_SIZE: usize = 2_000;

/// Root name used when the scanned path has no usable final component.
const FALLBACK_ROOT_NAME: &str = "root";

/// Move `pending` into the shared entries under one write-lock acquisition.
#[inline]
fn flush_pending(live_entries: &LiveEntries, pending: &mut Vec<FileEntry>) {
    if pending.is_empty() {
        return;
    }
    live_entries.write().append(pending);
}

/// Walk `root_path` and collect one entry per file into `live_entries`.
///
/// Sends `Update` roughly every 5 000 walked entries, `Error` for every
/// entry that could not be read, and exactly one terminal `Complete` or
/// `Cancelled`.
pub fn scan_directory(
    root_path: PathBuf,
    progress_tx: Sender<ScanProgress>,
    cancel_flag: Arc<AtomicBool>,
    live_entries: LiveEntries,
) {
    let start = Instant::now();
    let root_name = root_display_name(&root_path);

    let mut error_count: u64 = 0;
    let mut files_found: u64 = 0;
    let mut dirs_found: u64 = 0;
    let mut total_size: u64 = 0;
    let mut update_counter: u64 = 0;

    let mut pending: Vec<FileEntry> = Vec::with_capacity(BATCH_SIZE + 64);

    let walker = jwalk::WalkDir::new(&root_path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        // Check cancellation every 1000 entries.
        update_counter += 1;
        if update_counter.is_multiple_of(1_000) && cancel_flag.load(Ordering::Relaxed) {
            flush_pending(&live_entries, &mut pending);
            let _ = progress_tx.send(ScanProgress::Cancelled);
            return;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are typically access-denied on directories.
                error_count += 1;
                let _ = progress_tx.send(ScanProgress::Error {
                    path: err
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default(),
                    message: format!("{err}"),
                });
                continue;
            }
        };

        let path = entry.path();
        if path == root_path {
            continue;
        }

        if entry.file_type().is_dir() {
            dirs_found += 1;
            continue;
        }

        let Some(relative_path) = relative_path(&root_name, &root_path, &path) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();

        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                error_count += 1;
                let _ = progress_tx.send(ScanProgress::Error {
                    path: path.to_string_lossy().to_string(),
                    message: format!("{err}"),
                });
                continue;
            }
        };

        let size = meta.len();
        let mut file_entry = FileEntry::new(
            name,
            size,
            meta.modified().map(from_system_time).unwrap_or_default(),
        )
        .with_relative_path(relative_path);
        file_entry.created = meta.created().ok().map(from_system_time);

        pending.push(file_entry);
        files_found += 1;
        total_size += size;

        if pending.len() >= BATCH_SIZE {
            flush_pending(&live_entries, &mut pending);
        }

        if update_counter.is_multiple_of(5_000) {
            flush_pending(&live_entries, &mut pending);
            let _ = progress_tx.send(ScanProgress::Update {
                files_found,
                dirs_found,
                total_size,
                current_path: path.to_string_lossy().into_owned(),
            });
        }
    }

    flush_pending(&live_entries, &mut pending);

    let duration = start.elapsed();
    debug!(
        "Scan walk complete: {} files, {} dirs, {} errors in {:?}",
        files_found, dirs_found, error_count, duration
    );

    let _ = progress_tx.send(ScanProgress::Complete {
        duration,
        error_count,
    });
}

/// Build the forward-slash relative path of `path` under `root_path`,
/// prefixed with the root's display name.
///
/// Returns `None` if `path` is not inside `root_path`.
pub fn relative_path(root_name: &str, root_path: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root_path).ok()?;
    let mut out = String::from(root_name);
    for component in rel.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    Some(out)
}

/// Derive a display name for the scan root.
///
/// For folders this is the folder name; for drive roots like `C:\` it is
/// `C:`.
pub fn root_display_name(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path
            .to_string_lossy()
            .trim_end_matches(['\\', '/'])
            .to_string(),
    };
    if name.is_empty() {
        FALLBACK_ROOT_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_is_rooted_at_display_name() {
        let root = Path::new("/home/user/photos");
        let file = root.join("2024").join("beach.jpg");
        assert_eq!(
            relative_path("photos", root, &file).as_deref(),
            Some("photos/2024/beach.jpg")
        );
    }

    #[test]
    fn relative_path_for_direct_child() {
        let root = Path::new("/data");
        assert_eq!(
            relative_path("data", root, &root.join("a.txt")).as_deref(),
            Some("data/a.txt")
        );
    }

    #[test]
    fn relative_path_outside_root_is_none() {
        assert_eq!(
            relative_path("data", Path::new("/data"), Path::new("/other/a.txt")),
            None
        );
    }

    #[test]
    fn display_name_is_last_component() {
        assert_eq!(root_display_name(Path::new("/home/user/photos")), "photos");
    }

    #[test]
    fn display_name_of_filesystem_root_falls_back() {
        assert_eq!(root_display_name(Path::new("/")), FALLBACK_ROOT_NAME);
    }
}
