//! Spending summary
//!
//! Totals and per-category breakdown of the expenses in a date range.

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

use super::range::{filter_by_range, DateRange};

/// Sum of amounts; zero for an empty slice
pub fn total(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Per-category totals, every category present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotals(BTreeMap<Category, Money>);

impl CategoryTotals {
    /// Totals with every category at zero
    pub fn zeroed() -> Self {
        Self(Category::ALL.iter().map(|&c| (c, Money::zero())).collect())
    }

    /// Total for a category
    pub fn get(&self, category: Category) -> Money {
        self.0.get(&category).copied().unwrap_or_default()
    }

    /// Categories and totals in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(&c, &m)| (c, m))
    }

    /// Sum over all categories
    pub fn sum(&self) -> Money {
        self.0.values().sum()
    }
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Sum amounts per category
pub fn totals_by_category(records: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::zeroed();
    for expense in records {
        *totals.0.entry(expense.category).or_default() += expense.amount;
    }
    totals
}

/// Most recent first; records on the same date keep their relative order
pub fn sort_for_display(records: &mut [Expense]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Oldest first; records on the same date keep their relative order
pub fn sort_chronological(records: &mut [Expense]) {
    records.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Everything the summary view shows for a range
#[derive(Debug, Clone)]
pub struct RangeSummary {
    /// The range summarized
    pub range: DateRange,
    /// Expenses in the range, most recent first
    pub expenses: Vec<Expense>,
    /// Sum of all expenses in the range
    pub total: Money,
    /// Per-category sums
    pub by_category: CategoryTotals,
}

impl RangeSummary {
    /// Summarize `records` over `range`
    pub fn generate(records: &[Expense], range: DateRange) -> Self {
        let mut expenses = filter_by_range(records, range);
        let total = total(&expenses);
        let by_category = totals_by_category(&expenses);
        sort_for_display(&mut expenses);

        Self {
            range,
            expenses,
            total,
            by_category,
        }
    }

    /// Number of expenses in the range
    pub fn count(&self) -> usize {
        self.expenses.len()
    }
}
