//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_register, format_transaction_short};
use crate::error::{TallyError, TallyResult};
use crate::export::{export_to_file, export_transactions_csv};
use crate::models::{Period, Recurrence, TransactionDraft, TransactionType};
use crate::services::{FilterMode, LedgerService, TransactionFilter};
use crate::storage::Storage;

use super::parse_date;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a transaction, optionally repeating until a date
    Add {
        /// Amount (e.g., "12.50"); direction comes from --type
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// income or expense (defaults to the configured type)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Tag name, may be given up to three times
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Repeat interval: daily, weekly, biweekly, monthly, yearly or a day count
        #[arg(short, long, requires = "until")]
        repeat: Option<Recurrence>,
        /// Last date of a repeating series (YYYY-MM-DD)
        #[arg(short, long, requires = "repeat")]
        until: Option<String>,
    },
    /// List transactions of one type
    List {
        /// income or expense (defaults to the configured type)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
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

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let mut ledger = LedgerService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            date,
            tags,
            repeat,
            until,
        } => {
            let amount: f64 = amount.trim().parse().map_err(|_| {
                TallyError::Validation(format!(
                    "Invalid amount: '{}'. Use a number like '12.50'",
                    amount
                ))
            })?;

            let date = match date {
                Some(s) => parse_date(&s)?,
                None => ledger.today(),
            };

            let tags = ledger.resolve_tags(&tags).map_err(|e| {
                if e.is_not_found() && !storage.is_initialized() {
                    TallyError::Config(format!(
                        "{}. Run 'tally init' to create the default tags",
                        e
                    ))
                } else {
                    e
                }
            })?;
            let draft = TransactionDraft::new(
                amount,
                kind.unwrap_or(settings.default_type),
                date,
                tags,
            );

            match (repeat, until) {
                (Some(recurrence), Some(until)) => {
                    let end_date = parse_date(&until)?;
                    let saved = ledger.add_recurrence(&draft, end_date, recurrence)?;

                    println!(
                        "Recorded {} occurrence(s), repeating {} until {}:",
                        saved.len(),
                        recurrence,
                        end_date
                    );
                    for txn in &saved {
                        println!("  {}", format_transaction_short(txn, settings));
                    }
                }
                _ => {
                    let txn = ledger.add(&draft)?;
                    println!("Recorded: {}", format_transaction_short(&txn, settings));
                }
            }
        }

        TransactionCommands::List {
            kind,
            mode,
            from,
            to,
            output,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;

            let filter = TransactionFilter::new(kind.unwrap_or(settings.default_type))
                .mode(mode.unwrap_or(settings.default_mode))
                .period(Period::from_bounds(from, to));
            let transactions = ledger.filtered_items(&filter);

            match output {
                Some(path) => {
                    export_to_file(&path, |file| export_transactions_csv(&transactions, file))?;
                    println!(
                        "Exported {} transaction(s) to {}",
                        transactions.len(),
                        path.display()
                    );
                }
                None => print!("{}", format_transaction_register(&transactions, settings)),
            }
        }
    }

    Ok(())
}
