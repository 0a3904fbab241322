//! CSV Export functionality
//!
//! Exports filtered transactions and the per-tag balance breakdown to CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;
use crate::services::BalanceSummary;

/// Export transactions in the given order
///
/// Tags are joined with `;` in a single column.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TallyResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["ID", "Date", "Type", "Amount", "Tags"])?;

    for txn in transactions {
        let tags = txn
            .tags()
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(";");

        wtr.write_record([
            txn.id().value().to_string(),
            txn.date().format("%Y-%m-%d").to_string(),
            txn.kind().to_string(),
            format!("{:.2}", txn.amount()),
            tags,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the balance totals and per-tag expense breakdown
pub fn export_balance_csv<W: Write>(summary: &BalanceSummary, writer: W) -> TallyResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Tag", "Amount", "Percentage"])?;

    for row in summary.tag_breakdown() {
        wtr.write_record([
            row.tag.name.clone(),
            format!("{:.2}", row.amount),
            format!("{:.1}", row.percentage),
        ])?;
    }

    for (label, value) in [
        ("Total income", summary.total_income),
        ("Total expense", summary.total_expense),
        ("Balance", summary.balance),
    ] {
        wtr.write_record([label.to_string(), format!("{:.2}", value), String::new()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create `path` and hand it to an export function
pub fn export_to_file<F>(path: &Path, export: F) -> TallyResult<()>
where
    F: FnOnce(File) -> TallyResult<()>,
{
    let file = File::create(path).map_err(|e| {
        TallyError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    export(file)
}
