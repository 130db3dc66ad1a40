use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finsight::cli::{
    handle_alerts, handle_budget_command, handle_check, handle_export_command,
    handle_goal_command, handle_recommend, handle_report_command, handle_transaction_command,
    BudgetCommands, ExportCommands, GoalCommands, ReportCommands, TransactionCommands,
};
use finsight::config::{FinsightPaths, Settings};
use finsight::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Terminal-based personal finance tracker with insights",
    long_about = "finsight tracks income and expense transactions, budgets, and \
                  savings goals, and turns them into budget-tracking, trend, and \
                  financial-health insights from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Reports over the ledger
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show active alerts
    Alerts {
        /// Period ("2025-01", "current", "last"); default current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show ranked recommendations
    Recommend {
        /// Period
        #[arg(short, long)]
        period: Option<String>,
        /// Show only the top N recommendations
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Daily financial check
    Check,

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FinsightPaths::new().context("Failed to resolve data directory")?;
    let settings = Settings::load_or_create(&paths).context("Failed to load settings")?;
    let mut storage = Storage::new(paths).context("Failed to open storage")?;
    storage.load_all().context("Failed to load ledger data")?;

    match cli.command {
        Commands::Tx(cmd) => handle_transaction_command(&storage, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&storage, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Alerts { period } => handle_alerts(&storage, period)?,
        Commands::Recommend { period, top } => handle_recommend(&storage, period, top)?,
        Commands::Check => handle_check(&storage)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Init => {
            println!("Initialized finsight at {}", storage.paths().base_dir().display());
        }
        Commands::Config => {
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Data directory: {}", storage.paths().data_dir().display());
            println!("Settings file:  {}", storage.paths().settings_file().display());
            println!("Top categories: {}", settings.top_categories);
            println!("Trend window:   {}", settings.trend_window);
        }
    }

    Ok(())
}
