//! Export module for gastos
//!
//! Stateless transforms from the expense list (or a range summary) to a file
//! payload plus a suggested filename:
//! - CSV: the full list, one quoted row per expense
//! - Spreadsheet: summary and detail sheets for a date range
//! - JSON: the full list with export metadata, importable again

pub mod csv;
pub mod json;
pub mod spreadsheet;

pub use self::csv::{export_expenses_csv, write_expenses_csv, CSV_FILENAME};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION, JSON_FILENAME};
pub use spreadsheet::{export_summary_workbook, Cell, Sheet, SpreadsheetExport, Workbook};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GastosError, GastosResult};

/// A serialized export ready to be written somewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name
    pub filename: String,
    /// MIME type of the contents
    pub mime_type: &'static str,
    /// File contents
    pub contents: Vec<u8>,
}

impl ExportFile {
    /// Contents as text (every export format here is UTF-8)
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.contents).into_owned()
    }

    /// Write the file into `dir` under its suggested name
    pub fn write_to_dir(&self, dir: &Path) -> GastosResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            GastosError::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.contents).map_err(|e| {
            GastosError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}
