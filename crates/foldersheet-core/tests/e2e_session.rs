/// End-to-end tests for `FolderSession` — scan, group, toggle, export.
///
/// The real scanner and the real workbook writer are used against a
/// temporary directory, so no mocking is needed.
use foldersheet_core::model::ROOT_SENTINEL;
use foldersheet_core::session::scan_blocking;
use foldersheet_core::{
    ExportOptions, ExtraField, FolderSession, Language, SessionPhase, WorkbookExporter,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// ```text
/// project/
///   readme.md      (100 bytes)
///   Notes.txt      (50 bytes)
///   src/
///     main.rs      (300 bytes)
///     util/
///       fmt.rs     (20 bytes)
/// ```
fn make_project(tmp: &TempDir) -> PathBuf {
    let root = tmp.path().join("project");
    let util = root.join("src").join("util");
    fs::create_dir_all(&util).unwrap();
    write_bytes(&root.join("readme.md"), 100);
    write_bytes(&root.join("Notes.txt"), 50);
    write_bytes(&root.join("src").join("main.rs"), 300);
    write_bytes(&util.join("fmt.rs"), 20);
    root
}

fn group_paths(session: &FolderSession) -> Vec<String> {
    session.groups().iter().map(|g| g.path.clone()).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn blocking_scan_groups_by_subfolder() {
    let tmp = TempDir::new().unwrap();
    let root = make_project(&tmp);

    let session = scan_blocking(&root, &ExportOptions::default()).unwrap();

    assert_eq!(session.phase, SessionPhase::Ready);
    assert_eq!(session.root_name(), Some("project"));
    assert_eq!(
        group_paths(&session),
        vec!["project", "project/src", "project/src/util"]
    );
    let names: Vec<&str> = session.groups()[0]
        .files
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Notes.txt", "readme.md"]);

    let summary = session.summary().unwrap();
    assert_eq!(summary.total_files, 4);
    assert_eq!(summary.total_folders, 3);
    assert_eq!(summary.total_size, 470);
}

#[test]
fn toggling_mode_after_scan_does_not_rescan() {
    let tmp = TempDir::new().unwrap();
    let root = make_project(&tmp);
    let mut session = scan_blocking(&root, &ExportOptions::default()).unwrap();

    // Remove the files: a re-scan would now find nothing.
    fs::remove_dir_all(&root).unwrap();

    session.set_include_subfolders(false);
    assert_eq!(group_paths(&session), vec!["project"]);
    assert_eq!(session.groups()[0].files.len(), 2);

    session.set_include_subfolders(true);
    assert_eq!(session.groups().len(), 3);
}

/// Pumping the non-blocking message loop reaches the same end state as
/// the blocking wait.
#[test]
fn polling_scan_reaches_ready() {
    let tmp = TempDir::new().unwrap();
    let root = make_project(&tmp);

    let mut session = FolderSession::default();
    session.start_scan(root).unwrap();
    assert_eq!(session.phase, SessionPhase::Scanning);

    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while session.phase == SessionPhase::Scanning {
        assert!(
            std::time::Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        session.process_scan_messages();
        std::thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(session.phase, SessionPhase::Ready);
    assert_eq!(session.records().len(), 4);
}

#[test]
fn top_level_options_drop_nested_files() {
    let tmp = TempDir::new().unwrap();
    let root = make_project(&tmp);
    let options = ExportOptions {
        include_subfolders: false,
        ..ExportOptions::default()
    };

    let session = scan_blocking(&root, &options).unwrap();
    assert_eq!(group_paths(&session), vec!["project"]);
    assert!(!group_paths(&session).contains(&ROOT_SENTINEL.to_string()));
}

#[test]
fn scan_then_export_writes_workbook() {
    let tmp = TempDir::new().unwrap();
    let root = make_project(&tmp);
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let mut session = scan_blocking(&root, &ExportOptions::default()).unwrap();
    session.toggle_extra_field(ExtraField::Path);
    session.toggle_extra_field(ExtraField::CreatedDate);

    let exporter = WorkbookExporter::new(&out, Language::Es);
    let path = session.export(&exporter).unwrap();

    assert_eq!(path.parent(), Some(out.as_path()));
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("project_"));
    assert!(file_name.ends_with(".xlsx"));
    assert!(fs::metadata(&path).unwrap().len() > 0);
}
