//! Core data models for gastos
//!
//! This module contains the data structures of the expense domain: expense
//! records, the fixed category set, money amounts and ids.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, ExpenseValidationError, NewExpense, MAX_AMOUNT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
