//! CLI commands for reports
//!
//! Balance totals and the per-tag expense breakdown, printed or exported.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balance_report, format_scope};
use crate::error::TallyResult;
use crate::export::{export_balance_csv, export_to_file};
use crate::models::Period;
use crate::services::{FilterMode, LedgerService};
use crate::storage::Storage;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense and balance with expenses broken down by tag
    Balance {
        /// all, past or future (defaults to the configured mode)
        #[arg(short, long)]
        mode: Option<FilterMode>,
        /// Start date (YYYY-MM-DD); the end defaults to today
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD); the start defaults to today
        #[arg(long)]
        to: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let ledger = LedgerService::new(storage);

    match cmd {
        ReportCommands::Balance {
            mode,
            from,
            to,
            output,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let mode = mode.unwrap_or(settings.default_mode);
            let period = Period::from_bounds(from, to);

            let summary = ledger.balance(mode, period);

            match output {
                Some(path) => {
                    export_to_file(&path, |file| export_balance_csv(&summary, file))?;
                    println!("Balance report exported to {}", path.display());
                }
                None => {
                    let scope = format_scope(mode, period.as_ref());
                    print!("{}", format_balance_report(&summary, &scope, settings));
                }
            }
        }
    }

    Ok(())
}
