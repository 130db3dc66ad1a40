//! Core data models for finsight
//!
//! This module contains the value types of the ledger domain: money,
//! periods, categories, transactions, budgets, goals, and the immutable
//! snapshot the insights engine computes over.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use budget::{Budget, Cadence};
pub use category::{Category, ExpenseCategory, IncomeCategory, TxKind};
pub use goal::{Goal, GoalKind};
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use period::Period;
pub use snapshot::Snapshot;
pub use transaction::Transaction;
