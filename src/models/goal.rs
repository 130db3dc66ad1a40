//! Financial goal model
//!
//! A savings goal with a target amount and a deadline. Contributions cap
//! at the target; projections live in the insights layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GoalId;
use super::money::Money;

/// What a goal is saving toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalKind {
    EmergencyFund,
    Vacation,
    DebtPayoff,
    HouseDownPayment,
    Education,
    #[default]
    GeneralSavings,
    Custom,
}

impl GoalKind {
    pub const ALL: [GoalKind; 7] = [
        GoalKind::EmergencyFund,
        GoalKind::Vacation,
        GoalKind::DebtPayoff,
        GoalKind::HouseDownPayment,
        GoalKind::Education,
        GoalKind::GeneralSavings,
        GoalKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::EmergencyFund => "emergency-fund",
            GoalKind::Vacation => "vacation",
            GoalKind::DebtPayoff => "debt-payoff",
            GoalKind::HouseDownPayment => "house-down-payment",
            GoalKind::Education => "education",
            GoalKind::GeneralSavings => "general-savings",
            GoalKind::Custom => "custom",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emergency-fund" => Ok(GoalKind::EmergencyFund),
            "vacation" => Ok(GoalKind::Vacation),
            "debt-payoff" => Ok(GoalKind::DebtPayoff),
            "house-down-payment" => Ok(GoalKind::HouseDownPayment),
            "education" => Ok(GoalKind::Education),
            "general-savings" => Ok(GoalKind::GeneralSavings),
            "custom" => Ok(GoalKind::Custom),
            _ => Err(format!("Unknown goal kind: {}", s)),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Display name, unique per ledger (case-insensitive)
    pub name: String,

    /// What the goal is for
    #[serde(default)]
    pub kind: GoalKind,

    /// Target amount, always positive
    pub target: Money,

    /// Amount saved so far, 0 ..= target
    #[serde(default)]
    pub saved: Money,

    /// When the goal should be reached
    pub deadline: NaiveDate,

    /// When the goal was created
    pub created_on: NaiveDate,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(
        name: impl Into<String>,
        kind: GoalKind,
        target: Money,
        deadline: NaiveDate,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            kind,
            target,
            saved: Money::zero(),
            deadline,
            created_on,
        }
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        let remaining = self.target - self.saved;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Whether the target has been reached
    pub fn is_funded(&self) -> bool {
        self.saved >= self.target
    }

    /// Add to the saved amount, capping at the target
    pub fn contribute(&mut self, amount: Money) {
        self.saved += amount;
        if self.saved > self.target {
            self.saved = self.target;
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        if self.saved.is_negative() {
            return Err(GoalValidationError::NegativeSaved(self.saved));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} / {} by {}",
            self.name, self.kind, self.saved, self.target, self.deadline
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NonPositiveTarget(Money),
    NegativeSaved(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
            Self::NegativeSaved(saved) => {
                write!(f, "Goal saved amount cannot be negative, got {}", saved)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
