//! JSON Export functionality
//!
//! Exports the full expense list with a timestamp and schema version. The
//! same document can be imported back to replace the live list.

use crate::error::{GastosError, GastosResult};
use crate::models::Expense;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use super::ExportFile;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Suggested file name for the JSON export
pub const JSON_FILENAME: &str = "gastos_export.json";

fn default_schema_version() -> String {
    EXPORT_SCHEMA_VERSION.to_string()
}

/// Full export structure
///
/// Exports written before versioning only carried `exportedAt` and `items`,
/// so the other fields are optional on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    #[serde(default)]
    pub app_version: String,

    /// All expenses
    pub items: Vec<Expense>,
}

impl FullExport {
    /// Build an export of `records`
    pub fn new(records: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            items: records.to_vec(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()
                .map_err(|e| format!("Expense {}: {}", item.id, e))?;
            if !seen.insert(&item.id) {
                return Err(format!("Duplicate expense id {}", item.id.as_str()));
            }
        }

        Ok(())
    }
}

/// Write the full export as pretty-printed JSON
pub fn write_full_json<W: Write>(records: &[Expense], writer: &mut W) -> GastosResult<()> {
    let export = FullExport::new(records);

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}

/// Export all expenses to a pretty-printed JSON file payload
pub fn export_full_json(records: &[Expense]) -> GastosResult<ExportFile> {
    let mut contents = Vec::new();
    write_full_json(records, &mut contents)?;

    Ok(ExportFile {
        filename: JSON_FILENAME.to_string(),
        mime_type: "application/json",
        contents,
    })
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> GastosResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| GastosError::Validation(format!("Invalid export file: {}", e)))?;

    export.validate().map_err(GastosError::Validation)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn records() -> Vec<Expense> {
        vec![
            Expense::new(
                Money::from_units(1500),
                "super",
                Category::Comida,
                NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            )
            .unwrap(),
            Expense::new(
                Money::from_cents(12_050),
                "",
                Category::Casa,
                NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_export_shape() {
        let file = export_full_json(&records()).unwrap();
        assert_eq!(file.filename, "gastos_export.json");

        let value: serde_json::Value = serde_json::from_slice(&file.contents).unwrap();
        assert!(value["exportedAt"].is_string());
        assert_eq!(value["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["items"][0]["desc"], "super");
    }

    #[test]
    fn test_json_roundtrip() {
        let original = records();
        let file = export_full_json(&original).unwrap();

        let imported = import_from_json(&file.as_text()).unwrap();
        assert_eq!(imported.items, original);
    }

    #[test]
    fn test_import_unversioned_export() {
        let json = r#"{
            "exportedAt": "2026-01-31T10:00:00.000Z",
            "items": [
                {"id":"a1","amount":1500,"desc":"","category":"comida","date":"2026-01-05","createdAt":0}
            ]
        }"#;
        let imported = import_from_json(json).unwrap();
        assert_eq!(imported.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(imported.items.len(), 1);
    }

    #[test]
    fn test_import_rejects_bad_documents() {
        assert!(import_from_json("[]").unwrap_err().is_validation());

        let negative = r#"{"exportedAt":"2026-01-31T10:00:00Z","items":[
            {"id":"a1","amount":-5,"desc":"","category":"comida","date":"2026-01-05","createdAt":0}
        ]}"#;
        assert!(import_from_json(negative).unwrap_err().is_validation());

        let duplicate = r#"{"exportedAt":"2026-01-31T10:00:00Z","items":[
            {"id":"a1","amount":5,"desc":"","category":"comida","date":"2026-01-05","createdAt":0},
            {"id":"a1","amount":6,"desc":"","category":"ocio","date":"2026-01-06","createdAt":0}
        ]}"#;
        assert!(import_from_json(duplicate).unwrap_err().is_validation());

        let future = r#"{"schemaVersion":"9.0.0","exportedAt":"2026-01-31T10:00:00Z","items":[]}"#;
        assert!(import_from_json(future).unwrap_err().is_validation());
    }
}
