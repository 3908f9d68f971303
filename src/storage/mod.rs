//! Storage layer for gastos
//!
//! Two stores sit on top of a pluggable [`KeyValueStore`]: the live expense
//! list and the named month snapshots. Every mutation writes the whole
//! document back under its fixed key before returning.

pub mod backend;
pub mod expenses;
pub mod file_io;
pub mod snapshots;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use expenses::ExpenseStore;
pub use file_io::{read_text, write_json_atomic, write_text_atomic};
pub use snapshots::SnapshotStore;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::{GastosError, GastosResult};
use crate::models::Expense;

/// Key holding the live expense list
pub const ITEMS_KEY: &str = "gastos_items_v1";

/// Key holding the name -> expense list snapshot mapping
pub const MONTHS_KEY: &str = "gastos_months_v1";

/// Result of a mutation that has already been applied in memory
///
/// The in-memory state is authoritative. If writing it to the backend
/// failed, the error travels here instead of undoing the mutation.
#[derive(Debug)]
#[must_use]
pub struct Committed<T> {
    value: T,
    persisted: Result<(), GastosError>,
}

impl<T> Committed<T> {
    pub(crate) fn new(value: T, persisted: Result<(), GastosError>) -> Self {
        Self { value, persisted }
    }

    /// The mutation's result
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume and return the mutation's result
    pub fn into_value(self) -> T {
        self.value
    }

    /// Whether the new state reached the backend
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }

    /// The persistence failure, if any
    pub fn persistence_error(&self) -> Option<&GastosError> {
        self.persisted.as_ref().err()
    }

    /// Split into the result and the persistence failure, if any
    pub fn into_parts(self) -> (T, Option<GastosError>) {
        (self.value, self.persisted.err())
    }

    /// Transform the carried value, keeping the persistence outcome
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Committed<U> {
        Committed {
            value: f(self.value),
            persisted: self.persisted,
        }
    }
}

/// Read and decode the document under `key`
///
/// Missing or malformed content decodes to the default value. Only a failing
/// backend read is an error.
pub(crate) fn load_document<T>(backend: &dyn KeyValueStore, key: &str) -> GastosResult<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = backend.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "stored data is malformed, starting empty");
            Ok(T::default())
        }
    }
}

/// Drop records that break the expense invariants, logging how many went
pub(crate) fn retain_valid(records: Vec<Expense>, source: &str) -> Vec<Expense> {
    let before = records.len();
    let kept: Vec<Expense> = records.into_iter().filter(|e| e.validate().is_ok()).collect();
    if kept.len() != before {
        warn!(
            source,
            dropped = before - kept.len(),
            "ignoring expenses with invalid amounts"
        );
    }
    kept
}

/// Encode `value` and store it under `key`
pub(crate) fn store_document<T: Serialize>(
    backend: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> GastosResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| GastosError::Persistence(format!("Failed to serialize {}: {}", key, e)))?;
    let result = backend.set(key, &raw);
    if let Err(e) = &result {
        warn!(key, error = %e, "failed to persist, in-memory state kept");
    }
    result
}
