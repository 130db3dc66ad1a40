//! CSV export
//!
//! Spreadsheet-compatible exports, one file per record type. Amounts are
//! written in rupees with two decimals; the JSON export keeps raw paisa.

use std::io::Write;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Budget, Goal, Money, Transaction};

fn rupees(amount: Money) -> String {
    format!("{}.{:02}", amount.rupees(), amount.paisa_part())
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    writer: W,
    transactions: &[Transaction],
) -> FinsightResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "kind", "category", "amount", "description"])
        .map_err(|e| FinsightError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind().to_string(),
                txn.category.as_str().to_string(),
                rupees(txn.amount),
                txn.description.clone(),
            ])
            .map_err(|e| FinsightError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinsightError::Export(e.to_string()))
}

/// Export budgets to CSV
pub fn export_budgets_csv<W: Write>(writer: W, budgets: &[Budget]) -> FinsightResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["category", "limit", "cadence"])
        .map_err(|e| FinsightError::Export(e.to_string()))?;

    for budget in budgets {
        csv_writer
            .write_record([
                budget.category.as_str().to_string(),
                rupees(budget.limit),
                budget.cadence.to_string(),
            ])
            .map_err(|e| FinsightError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinsightError::Export(e.to_string()))
}

/// Export goals to CSV
pub fn export_goals_csv<W: Write>(writer: W, goals: &[Goal]) -> FinsightResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["name", "kind", "target", "saved", "deadline", "created"])
        .map_err(|e| FinsightError::Export(e.to_string()))?;

    for goal in goals {
        csv_writer
            .write_record([
                goal.name.clone(),
                goal.kind.to_string(),
                rupees(goal.target),
                rupees(goal.saved),
                goal.deadline.format("%Y-%m-%d").to_string(),
                goal.created_on.format("%Y-%m-%d").to_string(),
            ])
            .map_err(|e| FinsightError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinsightError::Export(e.to_string()))
}
