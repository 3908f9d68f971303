//! Month snapshot store
//!
//! Named, independent copies of the expense list. Saving under an existing
//! name replaces the previous copy without complaint.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::{GastosError, GastosResult};
use crate::models::Expense;

use super::backend::KeyValueStore;
use super::{load_document, retain_valid, store_document, Committed, MONTHS_KEY};

/// Named copies of expense lists, keyed by user-chosen name
pub struct SnapshotStore {
    backend: Rc<dyn KeyValueStore>,
    months: BTreeMap<String, Vec<Expense>>,
}

impl SnapshotStore {
    /// Open the store, loading whatever the backend holds
    ///
    /// Missing or malformed data yields an empty mapping. Records that break
    /// the amount invariant are dropped from each snapshot.
    pub fn open(backend: Rc<dyn KeyValueStore>) -> GastosResult<Self> {
        let loaded: BTreeMap<String, Vec<Expense>> = load_document(backend.as_ref(), MONTHS_KEY)?;
        let months = loaded
            .into_iter()
            .map(|(name, records)| {
                let records = retain_valid(records, &name);
                (name, records)
            })
            .collect::<BTreeMap<_, _>>();
        debug!(count = months.len(), "snapshot store opened");
        Ok(Self { backend, months })
    }

    /// Store a copy of `records` under `name`
    ///
    /// The committed value is `true` when an existing snapshot was replaced.
    pub fn save(&mut self, name: &str, records: &[Expense]) -> GastosResult<Committed<bool>> {
        validate_snapshot_name(name)?;

        let replaced = self
            .months
            .insert(name.to_string(), records.to_vec())
            .is_some();
        debug!(name, count = records.len(), replaced, "snapshot saved");

        let persisted = store_document(self.backend.as_ref(), MONTHS_KEY, &self.months);
        Ok(Committed::new(replaced, persisted))
    }

    /// Copy of the records saved under `name`
    pub fn load(&self, name: &str) -> GastosResult<Vec<Expense>> {
        self.months
            .get(name)
            .cloned()
            .ok_or_else(|| GastosError::snapshot_not_found(name))
    }

    /// Names of every stored snapshot
    pub fn list_names(&self) -> Vec<&str> {
        self.months.keys().map(String::as_str).collect()
    }

    /// Whether a snapshot named `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.months.contains_key(name)
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether no snapshot is stored
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Reject empty or whitespace-only snapshot names
pub fn validate_snapshot_name(name: &str) -> GastosResult<()> {
    if name.trim().is_empty() {
        return Err(GastosError::Validation(
            "Snapshot name cannot be empty".into(),
        ));
    }
    Ok(())
}
