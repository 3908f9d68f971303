//! Expense display formatting
//!
//! Formats the expense list as a table and single expenses as detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str, date_format: &str) -> Self {
        Self {
            id: expense.id.short(),
            date: expense.date.format(date_format).to_string(),
            category: expense.category.label(),
            amount: expense.amount.format_with_symbol(symbol),
            description: truncate(&expense.description, 40),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(records: &[Expense], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = records
        .iter()
        .map(|e| ExpenseRow::new(e, symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id.short()));
    output.push_str(&format!("Full ID:     {}\n", expense.id.as_str()));
    output.push_str(&format!("Date:        {}\n", expense.date.format(date_format)));
    output.push_str(&format!("Category:    {}\n", expense.category.label()));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn expense(units: i64, desc: &str) -> Expense {
        Expense::new(
            Money::from_units(units),
            desc,
            Category::Ocio,
            NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_table_contents() {
        let e = expense(1500, "cine");
        let table = format_expense_table(&[e.clone()], "$", "%d/%m/%Y");

        assert!(table.contains("Description"));
        assert!(table.contains(&e.id.short()));
        assert!(table.contains("06/01/2026"));
        assert!(table.contains("OCIO"));
        assert!(table.contains("$ 1.500"));
        assert!(table.contains("cine"));
    }

    #[test]
    fn test_details_skip_empty_description() {
        let details = format_expense_details(&expense(300, ""), "$", "%d/%m/%Y");
        assert!(details.contains("Date:        06/01/2026"));
        assert!(details.contains("Amount:      $ 300"));
        assert!(!details.contains("Description"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("almuerzo con amigos", 8), "almuerz…");
    }
}
