//! Closed category enumerations
//!
//! Categories are a fixed set keyed by transaction kind. Using a tagged
//! union makes "category valid for kind" hold by construction, so the
//! analytics core never re-validates it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Income => "income",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TxKind::Expense),
            "income" => Ok(TxKind::Income),
            _ => Err(CategoryParseError::UnknownKind(s.to_string())),
        }
    }
}

/// Spending categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Bills => "bills",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Health => "health",
            ExpenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(ExpenseCategory::Food),
            "transport" => Ok(ExpenseCategory::Transport),
            "shopping" => Ok(ExpenseCategory::Shopping),
            "bills" => Ok(ExpenseCategory::Bills),
            "entertainment" => Ok(ExpenseCategory::Entertainment),
            "health" => Ok(ExpenseCategory::Health),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(CategoryParseError::UnknownCategory {
                kind: TxKind::Expense,
                name: s.to_string(),
            }),
        }
    }
}

/// Income sources
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Business,
    Investment,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 6] = [
        IncomeCategory::Salary,
        IncomeCategory::Freelance,
        IncomeCategory::Business,
        IncomeCategory::Investment,
        IncomeCategory::Gift,
        IncomeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "salary",
            IncomeCategory::Freelance => "freelance",
            IncomeCategory::Business => "business",
            IncomeCategory::Investment => "investment",
            IncomeCategory::Gift => "gift",
            IncomeCategory::Other => "other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IncomeCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salary" => Ok(IncomeCategory::Salary),
            "freelance" => Ok(IncomeCategory::Freelance),
            "business" => Ok(IncomeCategory::Business),
            "investment" => Ok(IncomeCategory::Investment),
            "gift" => Ok(IncomeCategory::Gift),
            "other" => Ok(IncomeCategory::Other),
            _ => Err(CategoryParseError::UnknownCategory {
                kind: TxKind::Income,
                name: s.to_string(),
            }),
        }
    }
}

/// A category together with the kind it belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Category {
    Expense(ExpenseCategory),
    Income(IncomeCategory),
}

impl Category {
    /// The transaction kind this category belongs to
    pub fn kind(&self) -> TxKind {
        match self {
            Category::Expense(_) => TxKind::Expense,
            Category::Income(_) => TxKind::Income,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Expense(c) => c.as_str(),
            Category::Income(c) => c.as_str(),
        }
    }

    /// Parse a category name within a kind
    pub fn parse(kind: TxKind, name: &str) -> Result<Self, CategoryParseError> {
        match kind {
            TxKind::Expense => name.parse().map(Category::Expense),
            TxKind::Income => name.parse().map(Category::Income),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    UnknownKind(String),
    UnknownCategory { kind: TxKind, name: String },
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::UnknownKind(s) => write!(f, "Unknown transaction kind: {}", s),
            CategoryParseError::UnknownCategory { kind, name } => {
                write!(f, "Unknown {} category: {}", kind, name)
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
