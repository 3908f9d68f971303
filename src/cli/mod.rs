//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod config;
pub mod expense;
pub mod export;
pub mod import;
pub mod snapshot;

pub use config::{handle_config, ConfigArgs};
pub use expense::{
    handle_add, handle_clear, handle_list, handle_remove, handle_show, handle_summary, AddArgs,
};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import;
pub use snapshot::{handle_snapshot_command, SnapshotCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::reports::DateRange;
use crate::services::PendingReplace;
use crate::storage::Committed;

/// Inclusive date range flags
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl RangeArgs {
    /// Whether neither bound was given
    pub fn is_unset(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Resolve to a range, filling missing bounds with `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        DateRange::new(self.from.unwrap_or(today), self.to.unwrap_or(today))
    }
}

/// Unwrap a committed mutation, warning on stderr if it was not saved
pub(crate) fn report_persistence<T>(committed: Committed<T>) -> T {
    let (value, err) = committed.into_parts();
    if let Some(e) = err {
        eprintln!("Warning: change applied but not saved: {}", e);
    }
    value
}

/// Describe a pending replacement; returns whether it should be applied
pub(crate) fn confirm_replace(pending: &PendingReplace, yes: bool) -> bool {
    if yes {
        return true;
    }
    println!(
        "This would replace {} current expense{} with {} ({} expense{}).",
        pending.current_count(),
        plural(pending.current_count()),
        pending.source(),
        pending.incoming_count(),
        plural(pending.incoming_count()),
    );
    println!("Re-run with --yes to confirm.");
    false
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_range_defaults_to_today() {
        let args = RangeArgs::default();
        assert!(args.is_unset());
        assert_eq!(args.resolve(date(15)), DateRange::single_day(date(15)));
    }

    #[test]
    fn test_range_fills_missing_bound() {
        let args = RangeArgs {
            from: Some(date(1)),
            to: None,
        };
        assert!(!args.is_unset());
        assert_eq!(args.resolve(date(15)), DateRange::new(date(1), date(15)));
    }
}
