//! Display formatting for terminal output
//!
//! Renders expenses and range summaries as plain-text tables.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_bar, format_percentage, format_summary};
