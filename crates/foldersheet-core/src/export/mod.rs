/// Exporter — writes folder groups to a multi-sheet `.xlsx` workbook.
///
/// One sheet per group, in group order. Serialization is delegated to
/// `rust_xlsxwriter`; any failure it reports is wrapped in an
/// [`ExportError`] and leaves the caller's groups untouched, so an export
/// can simply be retried.
pub mod labels;
pub mod sheet;

pub use labels::{Language, UnknownLanguage};

use crate::model::{ExtraFieldSet, FolderGroup};
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Errors raised while building or writing a workbook.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("there are no folder groups to export")]
    NothingToExport,

    #[error("failed to build sheet `{sheet}`: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: XlsxError,
    },

    #[error("failed to write workbook to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

/// File name for an export: `<root>_<YYYY-MM-DD>.xlsx`.
///
/// Path separators in the root name are replaced so the file always lands
/// directly in the output directory.
pub fn output_file_name(root_name: &str, date: NaiveDate) -> String {
    let root: String = root_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{root}_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Build the in-memory workbook for `groups`.
pub fn build_workbook(
    groups: &[FolderGroup],
    extra_fields: &ExtraFieldSet,
    language: Language,
) -> Result<Workbook, ExportError> {
    if groups.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut workbook = Workbook::new();
    let header = sheet::header_row(extra_fields, language);
    let widths = sheet::column_widths(extra_fields);

    for (index, group) in groups.iter().enumerate() {
        let name = sheet::sheet_name(&group.folder_name, index);
        let wrap = |source| ExportError::Sheet {
            sheet: name.clone(),
            source,
        };

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name).map_err(wrap)?;

        for (col, width) in widths.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(wrap)?;
        }
        for (col, title) in header.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, title)
                .map_err(wrap)?;
        }
        for (row, file) in group.files.iter().enumerate() {
            let cells = sheet::file_row(file, extra_fields, language);
            for (col, value) in cells.iter().enumerate() {
                worksheet
                    .write_string(row as u32 + 1, col as u16, value)
                    .map_err(wrap)?;
            }
        }
    }

    Ok(workbook)
}

/// Writes workbooks into a fixed output directory.
#[derive(Debug, Clone)]
pub struct WorkbookExporter {
    pub output_dir: PathBuf,
    pub language: Language,
}

impl WorkbookExporter {
    pub fn new(output_dir: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            output_dir: output_dir.into(),
            language,
        }
    }

    /// Export with today's (UTC) date in the file name.
    pub fn export(
        &self,
        groups: &[FolderGroup],
        extra_fields: &ExtraFieldSet,
        root_name: &str,
    ) -> Result<PathBuf, ExportError> {
        self.export_dated(groups, extra_fields, root_name, Utc::now().date_naive())
    }

    /// Export with an explicit date in the file name. Returns the path of
    /// the written workbook.
    pub fn export_dated(
        &self,
        groups: &[FolderGroup],
        extra_fields: &ExtraFieldSet,
        root_name: &str,
        date: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        let path = self.output_dir.join(output_file_name(root_name, date));
        match write_workbook(groups, extra_fields, self.language, &path) {
            Ok(()) => {
                info!("Exported {} sheets to {}", groups.len(), path.display());
                Ok(path)
            }
            Err(e) => {
                warn!("Export failed: {e}");
                Err(e)
            }
        }
    }
}

fn write_workbook(
    groups: &[FolderGroup],
    extra_fields: &ExtraFieldSet,
    language: Language,
    path: &Path,
) -> Result<(), ExportError> {
    let mut workbook = build_workbook(groups, extra_fields, language)?;
    workbook.save(path).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
