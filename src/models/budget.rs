//! Budget model
//!
//! A spending limit for an expense category at a monthly or weekly cadence.
//! At most one budget exists per (category, cadence); the storage layer
//! enforces that by keying on the pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;
use super::money::Money;

/// How often a budget limit renews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Monthly,
    Weekly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Monthly => "monthly",
            Cadence::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Cadence::Monthly),
            "weekly" => Ok(Cadence::Weekly),
            _ => Err(format!("Unknown budget cadence: {}", s)),
        }
    }
}

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The expense category this budget covers
    pub category: ExpenseCategory,

    /// Limit per cadence interval, always positive
    pub limit: Money,

    /// Renewal cadence
    #[serde(default)]
    pub cadence: Cadence,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: ExpenseCategory, limit: Money, cadence: Cadence) -> Self {
        Self {
            category,
            limit,
            cadence,
        }
    }

    /// Create a monthly budget
    pub fn monthly(category: ExpenseCategory, limit: Money) -> Self {
        Self::new(category, limit, Cadence::Monthly)
    }

    /// The limit normalized to a full month.
    ///
    /// Weekly limits scale by days-in-month / 7 so that utilization math is
    /// always month-vs-month. Truncating integer division.
    pub fn monthly_limit(&self, days_in_month: u32) -> Money {
        match self.cadence {
            Cadence::Monthly => self.limit,
            Cadence::Weekly => {
                let (scaled, _) = Money::from_paisa(self.limit.paisa() * days_in_month as i64)
                    .div_rem(7);
                scaled
            }
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.category, self.limit, self.cadence)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
