//! CSV Export functionality
//!
//! Exports the full expense list. Every data field is quoted, the amount uses
//! a comma as decimal separator and the category is uppercased.

use crate::error::{GastosError, GastosResult};
use crate::models::Expense;
use std::io::Write;

use super::ExportFile;

/// Suggested file name for the CSV export
pub const CSV_FILENAME: &str = "gastos_export.csv";

const HEADER: &str = "date,category,amount,desc";

/// Write all expenses as CSV, rows separated by `\n`, no trailing newline
pub fn write_expenses_csv<W: Write>(records: &[Expense], writer: &mut W) -> GastosResult<()> {
    write!(writer, "{}", HEADER).map_err(|e| GastosError::Export(e.to_string()))?;

    for expense in records {
        write!(
            writer,
            "\n\"{}\",\"{}\",\"{}\",\"{}\"",
            expense.date.format("%Y-%m-%d"),
            expense.category.label(),
            expense.amount.to_decimal_comma(),
            escape_quotes(&expense.description)
        )
        .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all expenses to a CSV file payload
pub fn export_expenses_csv(records: &[Expense]) -> GastosResult<ExportFile> {
    let mut contents = Vec::new();
    write_expenses_csv(records, &mut contents)?;

    Ok(ExportFile {
        filename: CSV_FILENAME.to_string(),
        mime_type: "text/csv",
        contents,
    })
}

/// Double embedded quotes so the field survives inside quotes
fn escape_quotes(s: &str) -> String {
    s.replace('"', "\"\"")
}
