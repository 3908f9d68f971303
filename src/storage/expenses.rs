//! Expense store
//!
//! Owns the live expense list. New records go to the front of the list; the
//! whole list is written under [`ITEMS_KEY`] after every change.

use std::rc::Rc;

use tracing::debug;

use crate::error::{GastosError, GastosResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::backend::KeyValueStore;
use super::{load_document, retain_valid, store_document, Committed, ITEMS_KEY};

/// The authoritative list of expense records
pub struct ExpenseStore {
    backend: Rc<dyn KeyValueStore>,
    records: Vec<Expense>,
}

impl ExpenseStore {
    /// Open the store, loading whatever the backend holds
    ///
    /// Missing or malformed data yields an empty list. Records that break the
    /// amount invariant are dropped.
    pub fn open(backend: Rc<dyn KeyValueStore>) -> GastosResult<Self> {
        let loaded: Vec<Expense> = load_document(backend.as_ref(), ITEMS_KEY)?;
        let records = retain_valid(loaded, ITEMS_KEY);
        debug!(count = records.len(), "expense store opened");
        Ok(Self { backend, records })
    }

    /// Validate and add a new expense at the front of the list
    ///
    /// Invalid input leaves the list untouched.
    pub fn add(&mut self, input: NewExpense) -> GastosResult<Committed<Expense>> {
        let expense = input
            .into_expense()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        self.records.insert(0, expense.clone());
        debug!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(Committed::new(expense, self.persist()))
    }

    /// Remove the expense with the given id
    ///
    /// Unknown ids are a no-op; nothing is written in that case.
    pub fn remove(&mut self, id: &ExpenseId) -> Committed<Option<Expense>> {
        let Some(pos) = self.records.iter().position(|e| &e.id == id) else {
            return Committed::new(None, Ok(()));
        };

        let removed = self.records.remove(pos);
        debug!(id = %removed.id, "expense removed");
        Committed::new(Some(removed), self.persist())
    }

    /// Replace the whole list (snapshot load, clear-all, import)
    ///
    /// Records that break the amount invariant are dropped.
    pub fn replace_all(&mut self, records: Vec<Expense>) -> Committed<()> {
        let records = retain_valid(records, "replacement");
        debug!(
            old = self.records.len(),
            new = records.len(),
            "expense list replaced"
        );
        self.records = records;
        Committed::new((), self.persist())
    }

    /// Current records, most recently added first
    pub fn list(&self) -> &[Expense] {
        &self.records
    }

    /// Get an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| &e.id == id)
    }

    /// Resolve a user-typed reference (full id, short form or unique prefix)
    ///
    /// An exact id match wins over prefix matches.
    pub fn find(&self, reference: &str) -> GastosResult<&Expense> {
        if let Some(exact) = self.get(&ExpenseId::from(reference.trim())) {
            return Ok(exact);
        }

        let mut matches = self.records.iter().filter(|e| e.id.matches(reference));
        let first = matches
            .next()
            .ok_or_else(|| GastosError::expense_not_found(reference))?;
        if matches.next().is_some() {
            return Err(GastosError::Validation(format!(
                "Expense reference '{}' is ambiguous",
                reference
            )));
        }
        Ok(first)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> GastosResult<()> {
        store_document(self.backend.as_ref(), ITEMS_KEY, &self.records)
    }
}
