use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tally::cli::{handle_report_command, handle_tag_command, handle_transaction_command};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Tag-based income and expense tracker",
    long_about = "Tally records income and expenses against a hierarchy of tags, \
                  expands recurring transactions into dated series, and reports \
                  balances broken down by tag."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(tally::cli::TransactionCommands),

    /// Tag hierarchy commands
    #[command(subcommand)]
    Tag(tally::cli::TagCommands),

    /// Report commands
    #[command(subcommand)]
    Report(tally::cli::ReportCommands),

    /// Create the data directory, default tags and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Tag(cmd)) => {
            handle_tag_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Tally at: {}", paths.base_dir().display());
            tally::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default tags have been created:");
            for group in tally::storage::init::default_tag_forest() {
                let children: Vec<_> = group.children.iter().map(|c| c.name.as_str()).collect();
                println!("  - {} ({})", group.name, children.join(", "));
            }
            println!();
            println!("Run 'tally tag list' to see all tags.");
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Tags file:         {}", paths.tags_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default mode:    {}", settings.default_mode);
            println!("  Default type:    {}", settings.default_type);
        }
        None => {
            println!("Tally - tag-based income and expense tracking");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally init' to get started.");
        }
    }

    Ok(())
}
