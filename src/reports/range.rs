//! Date ranges and range filtering
//!
//! Both bounds are inclusive. The range start is taken as the first second
//! of `from`, the end as the last second of `to`, and every record as noon
//! of its own date; a record dated on either bound is therefore always in.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Expense;

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a range; `from` after `to` is allowed and matches nothing
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Range covering a single day
    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Whether the range matches nothing (`from` after `to`)
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Whether a record dated `date` falls in the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        let start = start_of_day(self.from);
        let end = end_of_day(self.to);
        let at = midday(date);
        start <= at && at <= end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.from, self.to)
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN + Duration::seconds(86_399))
}

fn midday(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN + Duration::hours(12))
}

/// Records dated inside `range`, in their original order
pub fn filter_by_range(records: &[Expense], range: DateRange) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}
