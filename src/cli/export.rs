//! Export CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FinsightError, FinsightResult};
use crate::export::{
    export_budgets_csv, export_full_json, export_full_yaml, export_goals_csv,
    export_transactions_csv, FullExport,
};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export each record type as CSV
    Csv {
        /// Output directory (default: the exports directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export the full ledger as JSON
    Json {
        /// Output file (default: exports/ledger.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export the full ledger as YAML
    Yaml {
        /// Output file (default: exports/ledger.yaml)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn create(path: &PathBuf) -> FinsightResult<File> {
    File::create(path)
        .map_err(|e| FinsightError::Export(format!("Failed to create {}: {}", path.display(), e)))
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinsightResult<()> {
    let transactions = storage.transactions.get_all()?;
    let budgets = storage.budgets.get_all()?;
    let goals = storage.goals.get_all()?;

    match cmd {
        ExportCommands::Csv { out } => {
            let dir = out.unwrap_or_else(|| storage.paths().export_dir());
            std::fs::create_dir_all(&dir).map_err(|e| {
                FinsightError::Export(format!("Failed to create {}: {}", dir.display(), e))
            })?;

            let transactions_path = dir.join("transactions.csv");
            export_transactions_csv(create(&transactions_path)?, &transactions)?;
            let budgets_path = dir.join("budgets.csv");
            export_budgets_csv(create(&budgets_path)?, &budgets)?;
            let goals_path = dir.join("goals.csv");
            export_goals_csv(create(&goals_path)?, &goals)?;

            println!(
                "Exported {} transactions, {} budgets, {} goals to {}",
                transactions.len(),
                budgets.len(),
                goals.len(),
                dir.display(),
            );
            Ok(())
        }

        ExportCommands::Json { out } => {
            let path = out.unwrap_or_else(|| storage.paths().export_dir().join("ledger.json"));
            let export = FullExport::new(transactions, budgets, goals);
            export_full_json(&mut create(&path)?, &export)?;
            println!("Exported ledger to {}", path.display());
            Ok(())
        }

        ExportCommands::Yaml { out } => {
            let path = out.unwrap_or_else(|| storage.paths().export_dir().join("ledger.yaml"));
            let export = FullExport::new(transactions, budgets, goals);
            export_full_yaml(create(&path)?, &export)?;
            println!("Exported ledger to {}", path.display());
            Ok(())
        }
    }
}
