//! Import CLI command
//!
//! Replaces the live list with the contents of a JSON export.

use std::fs;
use std::path::Path;

use super::{confirm_replace, plural, report_persistence};
use crate::error::{GastosError, GastosResult};
use crate::export::import_from_json;
use crate::services::Ledger;

/// Import a JSON export file in place of the live list
pub fn handle_import(ledger: &mut Ledger, file: &Path, yes: bool) -> GastosResult<()> {
    let contents = fs::read_to_string(file).map_err(|e| {
        GastosError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;
    let export = import_from_json(&contents)?;

    let pending = ledger.prepare_import(export);
    if !confirm_replace(&pending, yes) {
        return Ok(());
    }

    let count = report_persistence(ledger.apply(pending));
    println!(
        "Imported {} expense{} from: {}",
        count,
        plural(count),
        file.display()
    );
    Ok(())
}
