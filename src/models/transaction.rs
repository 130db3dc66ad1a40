//! Transaction model
//!
//! A single income or expense record. Amounts are always positive; the
//! category's kind carries the direction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TxKind};
use super::ids::TransactionId;
use super::money::Money;
use super::period::Period;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Category; its kind tells expense from income
    pub category: Category,

    /// Amount in paisa, always positive
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            category,
            amount,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a transaction with a description
    pub fn with_description(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(date, category, amount);
        txn.description = description.into();
        txn
    }

    /// The kind implied by the category
    pub fn kind(&self) -> TxKind {
        self.category.kind()
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TxKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TxKind::Income
    }

    /// The period this transaction falls in
    pub fn period(&self) -> Period {
        Period::containing(self.date)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
