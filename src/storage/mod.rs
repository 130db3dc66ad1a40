//! Storage layer for finsight
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The storage layer is also where the insights engine's input
//! is assembled: [`Storage::snapshot`] bundles every record into an
//! immutable [`Snapshot`].

pub mod budgets;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FinsightPaths;
use crate::error::FinsightError;
use crate::models::Snapshot;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinsightPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinsightPaths) -> Result<Self, FinsightError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinsightPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinsightError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinsightError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Assemble the immutable snapshot the insights engine computes over
    pub fn snapshot(&self) -> Result<Snapshot, FinsightError> {
        Ok(Snapshot::new(
            self.transactions.get_all()?,
            self.budgets.get_all()?,
            self.goals.get_all()?,
        ))
    }
}
