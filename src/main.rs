//! FolderSheet: inventory a folder's files into a multi-sheet workbook.
//!
//! Thin binary entry point. All logic lives in the `foldersheet-core`
//! crate; this file only parses flags, prints the preview and reports the
//! outcome.

mod preview;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use foldersheet_core::session::scan_blocking;
use foldersheet_core::{ExportError, ExportOptions, ExtraField, Language, WorkbookExporter};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "foldersheet",
    version,
    about = "Group a folder's files by (sub)folder and export them as an Excel workbook"
)]
struct Cli {
    /// Directory to inventory.
    dir: PathBuf,

    /// Group by every subfolder (the default unless the config says otherwise).
    #[arg(long, overrides_with = "no_subfolders")]
    subfolders: bool,

    /// Group by top-level folder only; files nested deeper are left out.
    #[arg(long, overrides_with = "subfolders")]
    no_subfolders: bool,

    /// Extra columns: createdDate, isHidden, extension, path.
    #[arg(long = "extra", value_name = "FIELD", value_delimiter = ',')]
    extra: Vec<ExtraField>,

    /// Drop any extra columns selected in the config file.
    #[arg(long, conflicts_with = "extra")]
    no_extra: bool,

    /// Language for headers and values (en, es).
    #[arg(long)]
    language: Option<Language>,

    /// Directory the workbook is written to.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// TOML file with default options. Flags override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the groups as JSON instead of the table preview.
    #[arg(long)]
    json: bool,

    /// Only preview; do not write a workbook.
    #[arg(long)]
    no_export: bool,

    /// Files shown per folder in the preview.
    #[arg(long, value_name = "N", default_value_t = preview::DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Merge the config file (if any) with command-line flags.
    fn options(&self) -> anyhow::Result<ExportOptions> {
        let options = match &self.config {
            Some(path) => ExportOptions::load(path)
                .with_context(|| format!("cannot load config {}", path.display()))?,
            None => ExportOptions::default(),
        };
        Ok(self.apply_flags(options))
    }

    /// Override `options` with whatever was given on the command line.
    fn apply_flags(&self, mut options: ExportOptions) -> ExportOptions {
        if self.subfolders {
            options.include_subfolders = true;
        }
        if self.no_subfolders {
            options.include_subfolders = false;
        }
        if self.no_extra {
            options.extra_fields.clear();
        } else if !self.extra.is_empty() {
            options.extra_fields = self.extra.iter().copied().collect();
        }
        if let Some(language) = self.language {
            options.language = language;
        }
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("FolderSheet starting");

    let options = cli.options()?;
    let dir = std::fs::canonicalize(&cli.dir)
        .with_context(|| format!("cannot open {}", cli.dir.display()))?;
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let session = scan_blocking(&dir, &options).context("failed to start directory scan")?;
    info!(
        "Scanned {} files in {} folders in {:.2?}",
        session.records().len(),
        session.scan_dirs_found,
        session.scan_duration.unwrap_or_default()
    );
    if session.scan_was_cancelled {
        warn!("Scan was cancelled; results are partial");
    }
    if session.scan_error_count > 0 {
        warn!(
            "{} entries could not be read and were skipped",
            session.scan_error_count
        );
        for (path, message) in session.scan_errors.iter().take(10) {
            warn!("  {path}: {message}");
        }
    }

    let root_name = session.root_name().unwrap_or_default().to_string();

    if cli.json {
        let doc = serde_json::json!({
            "root": root_name,
            "includeSubfolders": session.include_subfolders(),
            "summary": session.summary().unwrap_or_default(),
            "groups": session.groups(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!(
            "{}",
            preview::render_preview(
                session.groups(),
                session.extra_fields(),
                options.language,
                cli.preview_rows,
            )
        );
        if let Some(summary) = session.summary() {
            println!("\n{}", preview::render_summary(&root_name, &summary));
        }
    }

    if cli.no_export {
        return Ok(());
    }

    let exporter = WorkbookExporter::new(&options.output_dir, options.language);
    match session.export(&exporter) {
        Ok(path) => {
            println!("Workbook written to {}", path.display());
            Ok(())
        }
        Err(ExportError::NothingToExport) => {
            println!("No files found in {root_name}; nothing to export.");
            Ok(())
        }
        Err(e) => Err(e).context("failed to generate the Excel workbook"),
    }
}
