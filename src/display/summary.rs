//! Range summary formatting
//!
//! Renders the total and the per-category breakdown of a range summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::reports::RangeSummary;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format a range summary: header, total and one row per category
pub fn format_summary(summary: &RangeSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expenses {}\n", summary.range));
    output.push_str(&format!(
        "Total: {} ({} expense{})\n\n",
        summary.total.format_with_symbol(symbol),
        summary.count(),
        if summary.count() == 1 { "" } else { "s" }
    ));

    let total = summary.total.as_f64();
    let max = summary
        .by_category
        .iter()
        .map(|(_, amount)| amount.as_f64())
        .fold(0.0, f64::max);

    let rows = summary.by_category.iter().map(|(category, amount)| {
        let value = amount.as_f64();
        let pct = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        CategoryRow {
            category: category.label(),
            amount: amount.format_with_symbol(symbol),
            share: format_percentage(pct),
            bar: format_bar(value, max, BAR_WIDTH),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()));

    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
