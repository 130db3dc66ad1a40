//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_budget_overview;
use crate::error::{FinsightError, FinsightResult};
use crate::insights::overview;
use crate::models::{Budget, Cadence, ExpenseCategory};
use crate::storage::Storage;

use super::{parse_positive_amount, resolve_period};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) a budget for a category
    Set {
        /// Expense category (e.g., "food")
        category: String,
        /// Limit in rupees per cadence interval
        amount: String,
        /// "monthly" (default) or "weekly"
        #[arg(short, long, default_value = "monthly")]
        cadence: String,
    },

    /// Show budget status for a period
    List {
        /// Period ("2025-01", "current", "last"); default current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Expense category
        category: String,
        /// "monthly" (default) or "weekly"
        #[arg(short, long, default_value = "monthly")]
        cadence: String,
    },
}

fn parse_category(s: &str) -> FinsightResult<ExpenseCategory> {
    s.parse()
        .map_err(|e: crate::models::category::CategoryParseError| {
            FinsightError::Parse(e.to_string())
        })
}

fn parse_cadence(s: &str) -> FinsightResult<Cadence> {
    s.parse().map_err(FinsightError::Parse)
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> FinsightResult<()> {
    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            cadence,
        } => {
            let budget = Budget::new(
                parse_category(&category)?,
                parse_positive_amount(&amount)?,
                parse_cadence(&cadence)?,
            );
            budget
                .validate()
                .map_err(|e| FinsightError::Validation(e.to_string()))?;

            let replaced = storage.budgets.set(budget.clone())?;
            storage.budgets.save()?;

            if replaced {
                println!("Updated budget: {}", budget);
            } else {
                println!("Set budget: {}", budget);
            }
            Ok(())
        }

        BudgetCommands::List { period } => {
            let period = resolve_period(period.as_deref())?;
            let snapshot = storage.snapshot()?;
            print!("{}", format_budget_overview(&overview(&snapshot, period)));
            Ok(())
        }

        BudgetCommands::Delete { category, cadence } => {
            let category = parse_category(&category)?;
            let cadence = parse_cadence(&cadence)?;

            if storage.budgets.delete(category, cadence)? {
                storage.budgets.save()?;
                println!("Deleted {} {} budget", cadence, category);
                Ok(())
            } else {
                Err(FinsightError::budget_not_found(format!(
                    "{} ({})",
                    category, cadence
                )))
            }
        }
    }
}
