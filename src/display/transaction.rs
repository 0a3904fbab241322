//! Transaction display formatting
//!
//! Register views of transactions for terminal output.

use crate::config::Settings;
use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:10} {:8} {:>12}  {}",
        txn.date().format(&settings.date_format),
        txn.kind().to_string(),
        settings.format_amount(txn.amount()),
        format_tag_names(txn)
    )
}

/// Tag names joined for display, or a placeholder
pub fn format_tag_names(txn: &Transaction) -> String {
    if txn.tags().is_empty() {
        "(untagged)".to_string()
    } else {
        txn.tags()
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a list of transactions as a register with a total line
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:8} {:>12}  {}\n",
        "Date", "Type", "Amount", "Tags"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    let total: f64 = transactions.iter().map(|t| t.amount()).sum();
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:>19} {:>12}  ({} transaction{})\n",
        "Total:",
        settings.format_amount(total),
        transactions.len(),
        if transactions.len() == 1 { "" } else { "s" }
    ));

    output
}

/// One-line confirmation after recording a transaction
pub fn format_transaction_short(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} {} {} [{}] ({})",
        txn.date().format(&settings.date_format),
        txn.kind(),
        settings.format_amount(txn.amount()),
        format_tag_names(txn),
        txn.id()
    )
}
