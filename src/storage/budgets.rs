//! Budget repository for JSON storage
//!
//! Keyed by (category, cadence), which makes the at-most-one-budget
//! invariant structural: setting a budget for an existing key replaces it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinsightError;
use crate::models::{Budget, Cadence, ExpenseCategory};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<(ExpenseCategory, Cadence), Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk; later duplicates of a key win silently here,
    /// matching the replace-on-set semantics
    pub fn load(&self) -> Result<(), FinsightError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            data.insert((budget.category, budget.cadence), budget);
        }

        Ok(())
    }

    /// Save budgets to disk, ordered by category then cadence
    pub fn save(&self) -> Result<(), FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by_key(|b| (b.category, b.cadence != Cadence::Monthly));

        let file_data = BudgetData { budgets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a key
    pub fn get(
        &self,
        category: ExpenseCategory,
        cadence: Cadence,
    ) -> Result<Option<Budget>, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&(category, cadence)).cloned())
    }

    /// Get all budgets, ordered by category then cadence
    pub fn get_all(&self) -> Result<Vec<Budget>, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by_key(|b| (b.category, b.cadence != Cadence::Monthly));
        Ok(budgets)
    }

    /// Set (insert or replace) a budget, returning whether one was replaced
    pub fn set(&self, budget: Budget) -> Result<bool, FinsightError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data
            .insert((budget.category, budget.cadence), budget)
            .is_some())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(
        &self,
        category: ExpenseCategory,
        cadence: Cadence,
    ) -> Result<bool, FinsightError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&(category, cadence)).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_set_replaces_same_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let replaced = repo
            .set(Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000)))
            .unwrap();
        assert!(!replaced);

        let replaced = repo
            .set(Budget::monthly(ExpenseCategory::Food, Money::from_paisa(20000)))
            .unwrap();
        assert!(replaced);

        assert_eq!(repo.count().unwrap(), 1);
        let budget = repo
            .get(ExpenseCategory::Food, Cadence::Monthly)
            .unwrap()
            .unwrap();
        assert_eq!(budget.limit.paisa(), 20000);
    }

    #[test]
    fn test_cadences_are_distinct_keys() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000)))
            .unwrap();
        repo.set(Budget::new(
            ExpenseCategory::Food,
            Money::from_paisa(3000),
            Cadence::Weekly,
        ))
        .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000)))
            .unwrap();
        repo.set(Budget::monthly(
            ExpenseCategory::Transport,
            Money::from_paisa(5000),
        ))
        .unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(Budget::monthly(ExpenseCategory::Food, Money::from_paisa(10000)))
            .unwrap();
        assert!(repo.delete(ExpenseCategory::Food, Cadence::Monthly).unwrap());
        assert!(!repo.delete(ExpenseCategory::Food, Cadence::Monthly).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
