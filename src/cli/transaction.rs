//! Transaction CLI commands

use clap::Subcommand;

use crate::display::format_transaction_list;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{Category, Transaction, TxKind};
use crate::storage::Storage;

use super::{parse_date, parse_positive_amount, resolve_period, today};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// "expense" or "income"
        kind: String,
        /// Category name (e.g., "food", "salary")
        category: String,
        /// Amount in rupees (e.g., "125.50")
        amount: String,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List transactions
    List {
        /// Period ("2025-01", "current", "last"); default current month
        #[arg(short, long)]
        period: Option<String>,
        /// Filter by kind ("expense" or "income")
        #[arg(short, long)]
        kind: Option<String>,
        /// Show at most this many transactions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a transaction by id (full or unique prefix)
    Delete {
        /// Transaction id
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    cmd: TransactionCommands,
) -> FinsightResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let kind: TxKind = kind
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    FinsightError::Parse(e.to_string())
                })?;
            let category = Category::parse(kind, &category)
                .map_err(|e| FinsightError::Parse(e.to_string()))?;
            let amount = parse_positive_amount(&amount)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };

            let txn = Transaction::with_description(
                date,
                category,
                amount,
                description.unwrap_or_default(),
            );
            tracing::debug!(id = %txn.id, "recording transaction");

            storage.transactions.upsert(txn.clone())?;
            storage.transactions.save()?;

            println!("Recorded {} {} of {} on {}", txn.kind(), txn.category, txn.amount, txn.date);
            Ok(())
        }

        TransactionCommands::List { period, kind, limit } => {
            let period = resolve_period(period.as_deref())?;
            let kind = kind
                .map(|s| {
                    s.parse::<TxKind>()
                        .map_err(|e| FinsightError::Parse(e.to_string()))
                })
                .transpose()?;

            let mut transactions: Vec<Transaction> = storage
                .transactions
                .get_all()?
                .into_iter()
                .filter(|t| period.contains(t.date))
                .filter(|t| kind.map_or(true, |k| t.kind() == k))
                .collect();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_list(&transactions));
            Ok(())
        }

        TransactionCommands::Delete { id } => {
            let matches: Vec<Transaction> = storage
                .transactions
                .get_all()?
                .into_iter()
                .filter(|t| t.id.to_string().starts_with(&id))
                .collect();

            match matches.as_slice() {
                [] => Err(FinsightError::transaction_not_found(id)),
                [txn] => {
                    storage.transactions.delete(txn.id)?;
                    storage.transactions.save()?;
                    println!("Deleted {}", txn);
                    Ok(())
                }
                _ => Err(FinsightError::Validation(format!(
                    "Id prefix '{}' matches {} transactions; use more characters",
                    id,
                    matches.len()
                ))),
            }
        }
    }
}
