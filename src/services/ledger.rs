//! Ledger service
//!
//! Coordinates the expense store and the snapshot store on a shared backend.
//! Replacing the live list is a two-step affair: `prepare_*` describes what
//! would happen without touching anything, and `apply` carries it out once
//! the caller has confirmed.

use std::fmt;
use std::rc::Rc;

use tracing::info;

use crate::error::{GastosError, GastosResult};
use crate::export::{self, ExportFile, FullExport, SpreadsheetExport};
use crate::models::{Expense, NewExpense};
use crate::reports::{DateRange, RangeSummary};
use crate::storage::{Committed, ExpenseStore, KeyValueStore, SnapshotStore};

/// Where a pending replacement of the live list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceSource {
    /// A saved month snapshot
    Snapshot(String),
    /// Clear-all
    Clear,
    /// A JSON export file
    Import,
}

impl fmt::Display for ReplaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(name) => write!(f, "snapshot \"{}\"", name),
            Self::Clear => write!(f, "an empty list"),
            Self::Import => write!(f, "imported data"),
        }
    }
}

/// A replacement of the live list awaiting confirmation
#[derive(Debug, Clone)]
pub struct PendingReplace {
    source: ReplaceSource,
    records: Vec<Expense>,
    current_count: usize,
}

impl PendingReplace {
    /// Where the new list comes from
    pub fn source(&self) -> &ReplaceSource {
        &self.source
    }

    /// Records that would become the live list
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    /// Number of records that would replace the live list
    pub fn incoming_count(&self) -> usize {
        self.records.len()
    }

    /// Number of live records at preparation time
    pub fn current_count(&self) -> usize {
        self.current_count
    }
}

/// Expense tracking facade used by the interaction layer
pub struct Ledger {
    expenses: ExpenseStore,
    snapshots: SnapshotStore,
}

impl Ledger {
    /// Open both stores on the same backend
    pub fn open(backend: Rc<dyn KeyValueStore>) -> GastosResult<Self> {
        Ok(Self {
            expenses: ExpenseStore::open(backend.clone())?,
            snapshots: SnapshotStore::open(backend)?,
        })
    }

    /// The live expense store
    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    /// The snapshot store
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// Add an expense
    pub fn add_expense(&mut self, input: NewExpense) -> GastosResult<Committed<Expense>> {
        self.expenses.add(input)
    }

    /// Look up an expense by full id, short id or unique prefix
    pub fn find_expense(&self, reference: &str) -> GastosResult<&Expense> {
        self.expenses.find(reference)
    }

    /// Remove an expense by full id, short id or unique prefix
    pub fn remove_expense(&mut self, reference: &str) -> GastosResult<Committed<Expense>> {
        let id = self.expenses.find(reference)?.id.clone();
        let committed = self.expenses.remove(&id);
        let (removed, persist_err) = committed.into_parts();
        let removed = removed.ok_or_else(|| GastosError::expense_not_found(reference))?;
        Ok(Committed::new(removed, persist_err.map_or(Ok(()), Err)))
    }

    /// Summary of the live list over `range`
    pub fn summary(&self, range: DateRange) -> RangeSummary {
        RangeSummary::generate(self.expenses.list(), range)
    }

    /// Save a copy of the live list as a named snapshot
    ///
    /// The committed value is `true` when a snapshot of that name was replaced.
    pub fn save_snapshot(&mut self, name: &str) -> GastosResult<Committed<bool>> {
        let committed = self.snapshots.save(name, self.expenses.list())?;
        info!(name, replaced = *committed.value(), "month snapshot saved");
        Ok(committed)
    }

    /// Prepare replacing the live list with a saved snapshot
    ///
    /// Fails with NotFound for an unknown name; nothing changes either way.
    pub fn prepare_load(&self, name: &str) -> GastosResult<PendingReplace> {
        let records = self.snapshots.load(name)?;
        Ok(self.pending(ReplaceSource::Snapshot(name.to_string()), records))
    }

    /// Prepare clearing the live list
    pub fn prepare_clear(&self) -> PendingReplace {
        self.pending(ReplaceSource::Clear, Vec::new())
    }

    /// Prepare replacing the live list with the contents of a JSON export
    pub fn prepare_import(&self, export: FullExport) -> PendingReplace {
        self.pending(ReplaceSource::Import, export.items)
    }

    /// Carry out a confirmed replacement; the committed value is the new size
    pub fn apply(&mut self, pending: PendingReplace) -> Committed<usize> {
        let committed = self.expenses.replace_all(pending.records);
        let count = self.expenses.len();
        info!(source = %pending.source, count, "expense list replaced");
        committed.map(|_| count)
    }

    /// CSV export of the full live list
    pub fn export_csv(&self) -> GastosResult<ExportFile> {
        export::export_expenses_csv(self.expenses.list())
    }

    /// JSON export of the full live list
    pub fn export_json(&self) -> GastosResult<ExportFile> {
        export::export_full_json(self.expenses.list())
    }

    /// Spreadsheet export of the summary over `range`
    pub fn export_summary(&self, range: DateRange) -> SpreadsheetExport {
        export::export_summary_workbook(&self.summary(range))
    }

    fn pending(&self, source: ReplaceSource, records: Vec<Expense>) -> PendingReplace {
        PendingReplace {
            source,
            records,
            current_count: self.expenses.len(),
        }
    }
}
