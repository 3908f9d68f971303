//! Expense model
//!
//! A single logged outflow. Records are immutable once created; the store
//! only ever adds, removes or replaces them wholesale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, UnknownCategory};
use super::ids::ExpenseId;
use super::money::Money;

/// Largest amount a single expense may carry (one billion units)
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000);

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Money,

    /// Free-text description
    #[serde(rename = "desc", default)]
    pub description: String,

    /// Expense category
    pub category: Category,

    /// Day the expense happened
    pub date: NaiveDate,

    /// When the record was created (informational only)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense, rejecting non-positive or oversized amounts
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            id: ExpenseId::new(),
            amount,
            description: description.into().trim().to_string(),
            category,
            date,
            created_at: Utc::now(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category.label(),
            self.description,
            self.amount
        )
    }
}

/// Raw expense input as collected by the interaction layer
///
/// The category is still free text here; it is checked against the fixed set
/// when the store accepts the input.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Create an input with an empty description
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            description: String::new(),
            category: category.into(),
            date,
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the input and build the record
    pub fn into_expense(self) -> Result<Expense, ExpenseValidationError> {
        let category: Category = self
            .category
            .parse()
            .map_err(ExpenseValidationError::UnknownCategory)?;
        Expense::new(self.amount, self.description, category, self.date)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    UnknownCategory(UnknownCategory),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
            Self::UnknownCategory(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
