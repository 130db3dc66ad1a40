//! Immutable ledger snapshot
//!
//! The insights engine never touches storage: it computes over a `Snapshot`
//! assembled once per call. Construction is the validation boundary — a
//! record that violates its invariants is dropped with a warning and the
//! rest of the computation proceeds.

use std::collections::HashSet;

use super::budget::{Budget, Cadence};
use super::category::{ExpenseCategory, TxKind};
use super::goal::Goal;
use super::period::Period;
use super::transaction::Transaction;

/// An immutable bundle of validated transactions, budgets, and goals
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    goals: Vec<Goal>,
}

impl Snapshot {
    /// Build a snapshot, discarding records that fail validation.
    ///
    /// Discards are logged, never fatal: one malformed record must not take
    /// down a whole report. Duplicate budgets for the same (category,
    /// cadence) keep the first occurrence.
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>, goals: Vec<Goal>) -> Self {
        let transactions: Vec<Transaction> = transactions
            .into_iter()
            .filter(|txn| match txn.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(id = %txn.id, error = %e, "discarding invalid transaction");
                    false
                }
            })
            .collect();

        let mut seen: HashSet<(ExpenseCategory, Cadence)> = HashSet::new();
        let budgets: Vec<Budget> = budgets
            .into_iter()
            .filter(|budget| {
                if let Err(e) = budget.validate() {
                    tracing::warn!(category = %budget.category, error = %e, "discarding invalid budget");
                    return false;
                }
                if !seen.insert((budget.category, budget.cadence)) {
                    tracing::warn!(category = %budget.category, cadence = %budget.cadence, "discarding duplicate budget");
                    return false;
                }
                true
            })
            .collect();

        let goals: Vec<Goal> = goals
            .into_iter()
            .filter(|goal| match goal.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(name = %goal.name, error = %e, "discarding invalid goal");
                    false
                }
            })
            .collect();

        Self {
            transactions,
            budgets,
            goals,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Transactions dated within a period
    pub fn in_period(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |txn| period.contains(txn.date))
    }

    /// Transactions of one kind within a period
    pub fn in_period_of_kind(
        &self,
        period: Period,
        kind: TxKind,
    ) -> impl Iterator<Item = &Transaction> {
        self.in_period(period).filter(move |txn| txn.kind() == kind)
    }

    /// Expense transactions within a period
    pub fn expenses_in(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.in_period_of_kind(period, TxKind::Expense)
    }

    /// Income transactions within a period
    pub fn income_in(&self, period: Period) -> impl Iterator<Item = &Transaction> {
        self.in_period_of_kind(period, TxKind::Income)
    }

    /// The budget covering a category, preferring monthly over weekly
    pub fn budget_for(&self, category: ExpenseCategory) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| b.category == category && b.cadence == Cadence::Monthly)
            .or_else(|| self.budgets.iter().find(|b| b.category == category))
    }

    /// The period of the oldest transaction, if any
    pub fn earliest_period(&self) -> Option<Period> {
        self.transactions
            .iter()
            .map(|txn| txn.period())
            .min()
    }
}
