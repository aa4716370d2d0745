/// User-facing labels for exported sheets and the preview.
use crate::model::ExtraField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for headers and rendered values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Base column headers: name, type, size, modified date.
    pub fn base_headers(self) -> [&'static str; 4] {
        match self {
            Self::En => ["Name", "Type", "Size", "Modified date"],
            Self::Es => ["Nombre", "Tipo", "Tamaño", "Fecha de modificación"],
        }
    }

    /// Header for an extra column.
    pub fn extra_field_label(self, field: ExtraField) -> &'static str {
        match (self, field) {
            (Self::En, ExtraField::CreatedDate) => "Created date",
            (Self::En, ExtraField::IsHidden) => "Hidden",
            (Self::En, ExtraField::Extension) => "Extension",
            (Self::En, ExtraField::Path) => "Full path",
            (Self::Es, ExtraField::CreatedDate) => "Fecha de creación",
            (Self::Es, ExtraField::IsHidden) => "Oculto",
            (Self::Es, ExtraField::Extension) => "Extensión",
            (Self::Es, ExtraField::Path) => "Ruta completa",
        }
    }

    pub fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::En, true) => "Yes",
            (Self::En, false) => "No",
            (Self::Es, true) => "Sí",
            (Self::Es, false) => "No",
        }
    }

    /// Placeholder for files without an extension.
    pub fn no_extension(self) -> &'static str {
        match self {
            Self::En => "No extension",
            Self::Es => "Sin extensión",
        }
    }

    /// Placeholder for values the source could not provide.
    pub fn not_available(self) -> &'static str {
        "N/A"
    }

    /// Preview heading, e.g. `Preview (3 Excel sheets)`.
    pub fn preview_title(self, sheets: usize) -> String {
        match (self, sheets) {
            (Self::En, 1) => "Preview (1 Excel sheet)".to_string(),
            (Self::En, n) => format!("Preview ({n} Excel sheets)"),
            (Self::Es, 1) => "Vista previa (1 hoja de Excel)".to_string(),
            (Self::Es, n) => format!("Vista previa ({n} hojas de Excel)"),
        }
    }

    /// File-count badge shown next to a folder in the preview.
    pub fn file_count(self, count: usize) -> String {
        match self {
            Self::En => format!("{count} files"),
            Self::Es => format!("{count} archivos"),
        }
    }

    /// Trailing line when a preview is truncated.
    pub fn more_files(self, remaining: usize) -> String {
        match self {
            Self::En => format!("... and {remaining} more files"),
            Self::Es => format!("... y {remaining} archivos más"),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}` (expected `en` or `es`)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" => Ok(Self::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
