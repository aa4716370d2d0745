/// Terminal preview of the grouping — what each sheet will contain.
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use foldersheet_core::export::sheet::{file_row, header_row, sheet_name};
use foldersheet_core::model::size::{format_count, format_file_size};
use foldersheet_core::{ExtraFieldSet, FolderGroup, GroupingSummary, Language};
use std::fmt::Write;

/// Files shown per group before the preview is truncated.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Render every group as a titled table of its first `rows` files.
pub fn render_preview(
    groups: &[FolderGroup],
    extra_fields: &ExtraFieldSet,
    language: Language,
    rows: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", language.preview_title(groups.len()));

    for (index, group) in groups.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n[{}] {} ({})",
            sheet_name(&group.folder_name, index),
            group.path,
            language.file_count(group.files.len())
        );

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(header_row(extra_fields, language));
        for file in group.files.iter().take(rows) {
            table.add_row(file_row(file, extra_fields, language));
        }
        let _ = writeln!(out, "{table}");

        if group.files.len() > rows {
            let _ = writeln!(out, "{}", language.more_files(group.files.len() - rows));
        }
    }
    out
}

/// One-line totals shown after a folder is processed.
pub fn render_summary(root_name: &str, summary: &GroupingSummary) -> String {
    format!(
        "{root_name}: {} files in {} folders, {}",
        format_count(summary.total_files),
        format_count(summary.total_folders),
        format_file_size(summary.total_size)
    )
}
