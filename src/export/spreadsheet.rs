//! Spreadsheet export
//!
//! Shapes a range summary into a two-sheet workbook: `Resumen` with the
//! range bounds and totals, `Detalle` with one row per expense, oldest first.
//! Writing the workbook to a binary spreadsheet format is left to the
//! caller; [`Workbook::write_csv_sheets`] writes one CSV file per sheet.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GastosError, GastosResult};
use crate::reports::{sort_chronological, RangeSummary};

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A named sheet of rows; rows may have different lengths
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// An ordered set of sheets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Write each sheet as `<stem>_<sheet>.csv` inside `dir`
    pub fn write_csv_sheets(&self, dir: &Path, stem: &str) -> GastosResult<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|e| {
            GastosError::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let mut written = Vec::with_capacity(self.sheets.len());
        for sheet in &self.sheets {
            let path = dir.join(format!("{}_{}.csv", stem, sheet.name));
            let mut writer = ::csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&path)
                .map_err(|e| GastosError::Export(e.to_string()))?;

            for row in &sheet.rows {
                writer
                    .write_record(row.iter().map(|c| c.to_string()))
                    .map_err(|e| GastosError::Export(e.to_string()))?;
            }
            writer
                .flush()
                .map_err(|e| GastosError::Export(e.to_string()))?;

            written.push(path);
        }
        Ok(written)
    }
}

/// Workbook plus its suggested file name
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetExport {
    pub filename: String,
    pub workbook: Workbook,
}

impl SpreadsheetExport {
    /// File name without extension
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map_or(self.filename.as_str(), |(stem, _)| stem)
    }
}

/// Build the summary workbook for a range
pub fn export_summary_workbook(summary: &RangeSummary) -> SpreadsheetExport {
    let from = summary.range.from.format("%Y-%m-%d").to_string();
    let to = summary.range.to.format("%Y-%m-%d").to_string();

    let mut resumen = vec![
        vec![Cell::text("RESUMEN DE GASTOS")],
        vec![Cell::text("Desde"), Cell::text(from.clone())],
        vec![Cell::text("Hasta"), Cell::text(to.clone())],
        vec![Cell::text("")],
        vec![Cell::text("TOTAL"), Cell::Number(summary.total.as_f64())],
        vec![Cell::text("")],
        vec![Cell::text("TOTALES POR CATEGORÍA")],
    ];
    resumen.extend(
        summary
            .by_category
            .iter()
            .map(|(category, amount)| vec![Cell::text(category.label()), Cell::Number(amount.as_f64())]),
    );

    let mut expenses = summary.expenses.clone();
    sort_chronological(&mut expenses);

    let mut detalle = vec![vec![
        Cell::text("Fecha"),
        Cell::text("Categoria"),
        Cell::text("Monto"),
        Cell::text("Descripcion"),
    ]];
    detalle.extend(expenses.iter().map(|e| {
        vec![
            Cell::text(e.date.format("%Y-%m-%d").to_string()),
            Cell::text(e.category.label()),
            Cell::Number(e.amount.as_f64()),
            Cell::text(e.description.clone()),
        ]
    }));

    SpreadsheetExport {
        filename: format!("resumen_gastos_{}_a_{}.xlsx", from, to),
        workbook: Workbook {
            sheets: vec![
                Sheet {
                    name: "Resumen".to_string(),
                    rows: resumen,
                },
                Sheet {
                    name: "Detalle".to_string(),
                    rows: detalle,
                },
            ],
        },
    }
}
