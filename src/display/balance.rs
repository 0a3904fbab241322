//! Balance report formatting
//!
//! Income, expense and balance totals followed by a per-tag expense
//! breakdown with proportional bars.

use crate::config::Settings;
use crate::models::Period;
use crate::services::{BalanceSummary, FilterMode};

const BAR_WIDTH: usize = 20;
const REPORT_WIDTH: usize = 60;

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

/// Horizontal bar proportional to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe the selection a report was computed over
pub fn format_scope(mode: FilterMode, period: Option<&Period>) -> String {
    match period {
        Some(period) => format!("mode: {}, period: {}", mode, period),
        None => format!("mode: {}, all dates", mode),
    }
}

/// Full balance report
pub fn format_balance_report(summary: &BalanceSummary, scope: &str, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Balance Report\n");
    output.push_str(&format!("({})\n", scope));
    output.push_str(&"═".repeat(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<16}{:>14}\n",
        "Income:",
        settings.format_amount(summary.total_income)
    ));
    output.push_str(&format!(
        "{:<16}{:>14}\n",
        "Expense:",
        settings.format_amount(summary.total_expense)
    ));
    output.push_str(&"─".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "{:<16}{:>14}\n",
        "Balance:",
        settings.format_amount(summary.balance)
    ));

    let breakdown = summary.tag_breakdown();
    output.push('\n');
    if breakdown.is_empty() {
        output.push_str("No tagged expenses.\n");
        return output;
    }

    output.push_str("Expenses by tag\n");
    output.push_str(&"─".repeat(REPORT_WIDTH));
    output.push('\n');

    let max_amount = breakdown.first().map_or(0.0, |row| row.amount);
    for row in &breakdown {
        output.push_str(&format!(
            "{:<18}{:>12} {:>6} {}\n",
            row.tag.name,
            settings.format_amount(row.amount),
            format_percentage(row.percentage),
            format_bar(row.amount, max_amount, BAR_WIDTH)
        ));
    }
    output.push_str("A transaction counts in full toward each of its tags.\n");

    output
}
