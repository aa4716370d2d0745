/// Sheet layout — names, headers and rows for one folder group.
///
/// Everything here is pure so the layout can be tested without writing a
/// workbook.
use super::labels::Language;
use crate::model::size::format_file_size;
use crate::model::timestamp::format_date;
use crate::model::{ExtraField, ExtraFieldSet, FileRecord, ROOT_SENTINEL};

/// Characters the workbook format does not allow in sheet names.
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['\\', '/', '?', '*', '[', ']', ':'];

/// Length the folder name is cut to before any uniqueness suffix.
pub const SHEET_NAME_BASE_LEN: usize = 28;

/// Hard limit on sheet name length.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Widths for name, type, size and modified date.
pub const BASE_COLUMN_WIDTHS: [f64; 4] = [40.0, 15.0, 12.0, 20.0];

/// Width for every extra column.
pub const EXTRA_COLUMN_WIDTH: f64 = 20.0;

/// Build the sheet name for the group at `index` in export order.
///
/// Forbidden characters become `_`, the name is cut to
/// [`SHEET_NAME_BASE_LEN`] characters, and every sheet after the first
/// gets an `_<index>` suffix, the whole thing capped at
/// [`MAX_SHEET_NAME_LEN`].
pub fn sheet_name(folder_name: &str, index: usize) -> String {
    let mut base: Vec<char> = folder_name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .take(SHEET_NAME_BASE_LEN)
        .collect();

    // Names may not start or end with an apostrophe.
    if let Some(first) = base.first_mut() {
        if *first == '\'' {
            *first = '_';
        }
    }
    if let Some(last) = base.last_mut() {
        if *last == '\'' {
            *last = '_';
        }
    }

    let base: String = if base.is_empty() {
        ROOT_SENTINEL.to_string()
    } else {
        base.into_iter().collect()
    };

    if index == 0 {
        base
    } else {
        format!("{base}_{index}")
            .chars()
            .take(MAX_SHEET_NAME_LEN)
            .collect()
    }
}

/// Header row: the four base columns then the selected extras in
/// canonical order.
pub fn header_row(extra_fields: &ExtraFieldSet, language: Language) -> Vec<String> {
    language
        .base_headers()
        .iter()
        .map(|h| h.to_string())
        .chain(
            extra_fields
                .iter()
                .map(|&field| language.extra_field_label(field).to_string()),
        )
        .collect()
}

/// Render one file as a row of cell strings matching [`header_row`].
pub fn file_row(record: &FileRecord, extra_fields: &ExtraFieldSet, language: Language) -> Vec<String> {
    let mut row = Vec::with_capacity(4 + extra_fields.len());
    row.push(record.name.to_string());
    row.push(record.kind.to_string());
    row.push(format_file_size(record.size));
    row.push(format_date(&record.last_modified));

    for &field in extra_fields {
        row.push(extra_cell(record, field, language));
    }
    row
}

fn extra_cell(record: &FileRecord, field: ExtraField, language: Language) -> String {
    match field {
        ExtraField::CreatedDate => record
            .created_date()
            .map(format_date)
            .unwrap_or_else(|| language.not_available().to_string()),
        ExtraField::IsHidden => language.yes_no(record.is_hidden).to_string(),
        ExtraField::Extension if record.extension.is_empty() => {
            language.no_extension().to_string()
        }
        ExtraField::Extension => record.extension.to_string(),
        ExtraField::Path => record.path.clone(),
    }
}

/// Column widths matching [`header_row`].
pub fn column_widths(extra_fields: &ExtraFieldSet) -> Vec<f64> {
    BASE_COLUMN_WIDTHS
        .iter()
        .copied()
        .chain(std::iter::repeat(EXTRA_COLUMN_WIDTH).take(extra_fields.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest_entry;
    use crate::model::FileEntry;
    use chrono::{TimeZone, Utc};

    fn record(name: &str, path: &str, size: u64) -> FileRecord {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 18, 5, 0).unwrap();
        ingest_entry(&FileEntry::new(name, size, at).with_relative_path(path))
    }

    fn extras(fields: &[ExtraField]) -> ExtraFieldSet {
        fields.iter().copied().collect()
    }

    // ── sheet_name ───────────────────────────────────────────────────────

    #[test]
    fn first_sheet_keeps_plain_name() {
        assert_eq!(sheet_name("docs", 0), "docs");
    }

    #[test]
    fn later_sheets_get_index_suffix() {
        assert_eq!(sheet_name("docs", 1), "docs_1");
        assert_eq!(sheet_name("docs", 12), "docs_12");
    }

    #[test]
    fn forbidden_characters_are_replaced() {
        assert_eq!(sheet_name(r"a\b/c?d*e[f]g:h", 0), "a_b_c_d_e_f_g_h");
    }

    #[test]
    fn long_names_are_truncated_before_suffix() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert_eq!(sheet_name(long, 0), "abcdefghijklmnopqrstuvwxyz01");
        assert_eq!(sheet_name(long, 0).chars().count(), SHEET_NAME_BASE_LEN);
        assert_eq!(sheet_name(long, 7), "abcdefghijklmnopqrstuvwxyz01_7");
    }

    #[test]
    fn suffixed_names_never_exceed_limit() {
        let long = "x".repeat(40);
        let name = sheet_name(&long, 12_345);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(name.starts_with(&"x".repeat(28)));
    }

    /// Truncation counts characters, not bytes, so multi-byte names are
    /// never split inside a code point.
    #[test]
    fn truncation_counts_characters() {
        let name = "ñ".repeat(30);
        assert_eq!(sheet_name(&name, 0).chars().count(), SHEET_NAME_BASE_LEN);
    }

    #[test]
    fn apostrophes_at_edges_are_replaced() {
        assert_eq!(sheet_name("'quoted'", 0), "_quoted_");
        assert_eq!(sheet_name("it's", 0), "it's");
    }

    #[test]
    fn empty_name_falls_back_to_sentinel() {
        assert_eq!(sheet_name("", 0), ROOT_SENTINEL);
    }

    // ── header_row ───────────────────────────────────────────────────────

    #[test]
    fn header_without_extras_is_base_columns() {
        assert_eq!(
            header_row(&ExtraFieldSet::new(), Language::En),
            vec!["Name", "Type", "Size", "Modified date"]
        );
    }

    #[test]
    fn header_extras_follow_canonical_order() {
        let selection = extras(&[ExtraField::Path, ExtraField::IsHidden]);
        assert_eq!(
            header_row(&selection, Language::En),
            vec!["Name", "Type", "Size", "Modified date", "Hidden", "Full path"]
        );
    }

    #[test]
    fn header_in_spanish() {
        let selection = extras(&[ExtraField::Extension]);
        assert_eq!(
            header_row(&selection, Language::Es),
            vec!["Nombre", "Tipo", "Tamaño", "Fecha de modificación", "Extensión"]
        );
    }

    // ── file_row ─────────────────────────────────────────────────────────

    #[test]
    fn row_renders_base_columns() {
        let r = record("notes.txt", "docs/notes.txt", 1536);
        let row = file_row(&r, &ExtraFieldSet::new(), Language::En);
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], "notes.txt");
        assert_eq!(row[1], ".txt");
        assert_eq!(row[2], "1.5 KB");
        assert_eq!(row[3], format_date(&r.last_modified));
    }

    #[test]
    fn row_renders_every_extra_column() {
        let r = record(".env", "proj/.env", 10);
        let row = file_row(&r, &extras(&ExtraField::ALL), Language::En);
        assert_eq!(row.len(), 8);
        assert_eq!(row[4], "N/A");
        assert_eq!(row[5], "Yes");
        assert_eq!(row[6], ".env");
        assert_eq!(row[7], "proj/.env");
    }

    #[test]
    fn row_uses_placeholder_for_missing_extension() {
        let r = record("README", "proj/README", 10);
        let row = file_row(&r, &extras(&[ExtraField::Extension, ExtraField::IsHidden]), Language::Es);
        assert_eq!(row[4], "No");
        assert_eq!(row[5], "Sin extensión");
    }

    #[test]
    fn row_renders_created_date_when_known() {
        let created = Utc.with_ymd_and_hms(2020, 1, 1, 9, 30, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 18, 5, 0).unwrap();
        let r = ingest_entry(&FileEntry::new("a.txt", 1, at).with_created(created));
        let row = file_row(&r, &extras(&[ExtraField::CreatedDate]), Language::En);
        assert_eq!(row[4], format_date(&created));
    }

    #[test]
    fn widths_match_header_length() {
        let selection = extras(&[ExtraField::CreatedDate, ExtraField::Path]);
        let widths = column_widths(&selection);
        assert_eq!(widths.len(), header_row(&selection, Language::En).len());
        assert_eq!(widths, vec![40.0, 15.0, 12.0, 20.0, 20.0, 20.0]);
    }
}
