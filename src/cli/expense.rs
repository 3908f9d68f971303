//! Expense CLI commands
//!
//! Add, remove, list and summarize expenses, and clear the live list.

use chrono::NaiveDate;
use clap::Args;
use tracing::debug;

use super::{confirm_replace, plural, report_persistence, RangeArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_summary};
use crate::error::{GastosError, GastosResult};
use crate::models::{Money, NewExpense};
use crate::reports::{filter_by_range, sort_for_display};
use crate::services::Ledger;

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "1500", "1.500", "12,50" or "1.234,56")
    pub amount: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Category (casa, personal, ocio, comida, eventuales, lolo)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Record a new expense
pub fn handle_add(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> GastosResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        GastosError::Validation(format!("Invalid amount '{}': {}", args.amount, e))
    })?;
    let category = args
        .category
        .unwrap_or_else(|| settings.default_category.to_string());

    let input = NewExpense::new(amount, category, args.date.unwrap_or(today))
        .description(args.description);
    let expense = report_persistence(ledger.add_expense(input)?);

    println!(
        "Added {}: {} {} {}",
        expense.id.short(),
        expense.date.format(&settings.date_format),
        expense.category.label(),
        expense.amount.format_with_symbol(&settings.currency_symbol),
    );
    Ok(())
}

/// Remove an expense by id or id prefix
pub fn handle_remove(ledger: &mut Ledger, settings: &Settings, reference: &str) -> GastosResult<()> {
    let removed = report_persistence(ledger.remove_expense(reference)?);

    println!(
        "Removed {}: {} {}",
        removed.id.short(),
        removed.category.label(),
        removed.amount.format_with_symbol(&settings.currency_symbol),
    );
    Ok(())
}

/// Show one expense in full
pub fn handle_show(ledger: &Ledger, settings: &Settings, reference: &str) -> GastosResult<()> {
    let expense = ledger.find_expense(reference)?;
    print!(
        "{}",
        format_expense_details(expense, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// List expenses, newest first
///
/// Without range flags the whole list is shown.
pub fn handle_list(
    ledger: &Ledger,
    settings: &Settings,
    range: &RangeArgs,
    today: NaiveDate,
) -> GastosResult<()> {
    let mut records = if range.is_unset() {
        ledger.expenses().list().to_vec()
    } else {
        filter_by_range(ledger.expenses().list(), range.resolve(today))
    };
    sort_for_display(&mut records);
    debug!(count = records.len(), "listing expenses");

    print!(
        "{}",
        format_expense_table(&records, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Print totals for a date range
pub fn handle_summary(
    ledger: &Ledger,
    settings: &Settings,
    range: &RangeArgs,
    today: NaiveDate,
) -> GastosResult<()> {
    let summary = ledger.summary(range.resolve(today));
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Delete every live expense; snapshots are kept
pub fn handle_clear(ledger: &mut Ledger, yes: bool) -> GastosResult<()> {
    let pending = ledger.prepare_clear();
    if !confirm_replace(&pending, yes) {
        return Ok(());
    }

    let removed = pending.current_count();
    report_persistence(ledger.apply(pending));
    println!("Cleared {} expense{}.", removed, plural(removed));
    Ok(())
}
