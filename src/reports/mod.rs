//! Aggregation over the expense list
//!
//! Pure functions: they take the records and a date range and derive the
//! filtered view, the grand total and the per-category totals. Callers
//! recompute whenever the list or the range changes.

pub mod range;
pub mod spending;

pub use range::{filter_by_range, DateRange};
pub use spending::{
    sort_chronological, sort_for_display, total, totals_by_category, CategoryTotals,
    RangeSummary,
};
