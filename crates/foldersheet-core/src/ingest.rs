/// Ingestor — turns raw file entries into [`FileRecord`]s.
///
/// Only metadata already carried by the entry is used; file contents are
/// never opened. Ingestion cannot fail for well-formed entries.
use crate::model::{AttributeValue, FileEntry, FileRecord, RecordAttribute};
use compact_str::{format_compact, CompactString, ToCompactString};
use std::collections::BTreeMap;

/// Category label used when neither an extension nor a MIME subtype exists.
pub const FALLBACK_KIND: &str = "file";

/// Build one record per entry, preserving input order.
pub fn ingest<'a, I>(entries: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = &'a FileEntry>,
{
    entries.into_iter().map(ingest_entry).collect()
}

/// Build the record for a single entry.
pub fn ingest_entry(entry: &FileEntry) -> FileRecord {
    let extension = file_extension(&entry.name);
    let kind = file_kind(&extension, entry.mime_type.as_deref());

    let mut attributes = BTreeMap::new();
    if let Some(created) = entry.created {
        attributes.insert(RecordAttribute::CreatedDate, AttributeValue::Instant(created));
    }

    FileRecord {
        name: CompactString::new(&entry.name),
        kind,
        size: entry.size,
        last_modified: entry.last_modified,
        path: entry.relative_path.clone(),
        extension,
        is_hidden: entry.name.starts_with('.'),
        attributes,
    }
}

/// Everything after the last `.`, lowercased and prefixed with `.`.
///
/// Any name containing a dot has an extension, so `.gitignore` reports
/// `.gitignore` and `notes.` reports `.`. Names without a dot yield an
/// empty string.
pub fn file_extension(name: &str) -> CompactString {
    match name.rsplit_once('.') {
        Some((_, ext)) => format_compact!(".{}", ext.to_lowercase()),
        None => CompactString::default(),
    }
}

/// Category label: the extension if any, else the MIME subtype, else
/// [`FALLBACK_KIND`].
pub fn file_kind(extension: &str, mime_type: Option<&str>) -> CompactString {
    if !extension.is_empty() {
        return extension.to_compact_string();
    }
    mime_type
        .and_then(|mime| mime.split('/').nth(1))
        .filter(|subtype| !subtype.is_empty())
        .unwrap_or(FALLBACK_KIND)
        .to_compact_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(name: &str, path: &str) -> FileEntry {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        FileEntry::new(name, 42, at).with_relative_path(path)
    }

    // ── file_extension ───────────────────────────────────────────────────

    #[test]
    fn extension_takes_last_segment_lowercased() {
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("Photo.JPG"), ".jpg");
    }

    #[test]
    fn extension_empty_without_dot() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(""), "");
    }

    /// Dotfiles keep the naive split: the whole name is the extension.
    #[test]
    fn extension_of_dotfile_is_whole_name() {
        assert_eq!(file_extension(".env"), ".env");
        assert_eq!(file_extension(".gitignore"), ".gitignore");
    }

    #[test]
    fn extension_of_trailing_dot_is_bare_dot() {
        assert_eq!(file_extension("notes."), ".");
    }

    // ── file_kind ────────────────────────────────────────────────────────

    #[test]
    fn kind_prefers_extension() {
        assert_eq!(file_kind(".pdf", Some("application/pdf")), ".pdf");
    }

    #[test]
    fn kind_falls_back_to_mime_subtype() {
        assert_eq!(file_kind("", Some("text/plain")), "plain");
    }

    #[test]
    fn kind_falls_back_to_literal_label() {
        assert_eq!(file_kind("", None), FALLBACK_KIND);
        assert_eq!(file_kind("", Some("")), FALLBACK_KIND);
        assert_eq!(file_kind("", Some("application/")), FALLBACK_KIND);
        assert_eq!(file_kind("", Some("opaque")), FALLBACK_KIND);
    }

    // ── ingest ───────────────────────────────────────────────────────────

    #[test]
    fn ingest_copies_metadata_and_derives_fields() {
        let records = ingest(&[entry("Report.PDF", "docs/Report.PDF")]);
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.name, "Report.PDF");
        assert_eq!(r.path, "docs/Report.PDF");
        assert_eq!(r.size, 42);
        assert_eq!(r.extension, ".pdf");
        assert_eq!(r.kind, ".pdf");
        assert!(!r.is_hidden);
        assert!(r.path.ends_with(r.name.as_str()));
        assert!(r.attributes.is_empty());
    }

    #[test]
    fn ingest_marks_dotfiles_hidden() {
        let records = ingest(&[entry(".env", "proj/.env"), entry("env", "proj/env")]);
        assert!(records[0].is_hidden);
        assert!(!records[1].is_hidden);
        assert_eq!(records[1].kind, FALLBACK_KIND);
    }

    #[test]
    fn ingest_records_created_date_only_when_supplied() {
        let created = Utc.with_ymd_and_hms(2020, 5, 6, 7, 8, 9).unwrap();
        let records = ingest(&[
            entry("a.txt", "a.txt").with_created(created),
            entry("b.txt", "b.txt"),
        ]);
        assert_eq!(records[0].created_date(), Some(&created));
        assert_eq!(records[1].created_date(), None);
    }

    /// Entries without an extension take their type from the MIME subtype
    /// the ingestion source supplied.
    #[test]
    fn ingest_uses_mime_type_for_extensionless_files() {
        let typed = entry("Makefile", "proj/Makefile").with_mime_type("text/x-makefile");
        let untyped = entry("LICENSE", "proj/LICENSE");
        let records = ingest([&typed, &untyped]);
        assert_eq!(records[0].kind, "x-makefile");
        assert_eq!(records[0].extension, "");
        assert_eq!(records[1].kind, FALLBACK_KIND);
    }

    #[test]
    fn ingest_preserves_input_order() {
        let records = ingest(&[entry("z", "z"), entry("a", "a")]);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn ingest_empty_input() {
        let entries: Vec<FileEntry> = Vec::new();
        assert!(ingest(&entries).is_empty());
    }
}
