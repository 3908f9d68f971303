//! Service layer for gastos
//!
//! The service layer sits on top of the storage layer and the pure
//! aggregation and export functions, exposing the operations the
//! interaction layer needs.

pub mod ledger;

pub use ledger::{Ledger, PendingReplace, ReplaceSource};
