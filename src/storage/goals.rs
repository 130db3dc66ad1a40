//! Goal repository for JSON storage
//!
//! Goals are addressed by name in the CLI (case-insensitive, unique) and
//! by id internally.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinsightError;
use crate::models::{Goal, GoalId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<Goal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    /// Create a new goal repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), FinsightError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk, ordered by deadline
    pub fn save(&self) -> Result<(), FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline).then_with(|| a.name.cmp(&b.name)));

        let file_data = GoalData { goals };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all goals, ordered by deadline
    pub fn get_all(&self) -> Result<Vec<Goal>, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline).then_with(|| a.name.cmp(&b.name)));
        Ok(goals)
    }

    /// Find a goal by name, case-insensitive
    pub fn find_by_name(&self, name: &str) -> Result<Option<Goal>, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert a goal; names must be unique (case-insensitive)
    pub fn insert(&self, goal: Goal) -> Result<(), FinsightError> {
        if self.find_by_name(&goal.name)?.is_some() {
            return Err(FinsightError::Duplicate {
                entity_type: "Goal",
                identifier: goal.name,
            });
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(goal.id, goal);
        Ok(())
    }

    /// Add to a goal's saved amount (capped at its target), returning the
    /// updated goal
    pub fn contribute(&self, name: &str, amount: Money) -> Result<Goal, FinsightError> {
        let goal = self
            .find_by_name(name)?
            .ok_or_else(|| FinsightError::goal_not_found(name))?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entry = data
            .get_mut(&goal.id)
            .ok_or_else(|| FinsightError::goal_not_found(name))?;
        entry.contribute(amount);
        Ok(entry.clone())
    }

    /// Delete a goal by name, returning whether it existed
    pub fn delete_by_name(&self, name: &str) -> Result<bool, FinsightError> {
        let found = self.find_by_name(name)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(match found {
            Some(goal) => data.remove(&goal.id).is_some(),
            None => false,
        })
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, FinsightError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
