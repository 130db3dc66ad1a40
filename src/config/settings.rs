//! User settings for finsight
//!
//! Small JSON-backed preferences file: report defaults live here so the
//! CLI stays flag-light. Core computation never reads settings.

use serde::{Deserialize, Serialize};

use super::paths::FinsightPaths;
use crate::error::FinsightError;
use crate::storage::file_io::{read_json, write_json_atomic};

fn default_schema_version() -> u32 {
    1
}

fn default_top_n() -> usize {
    3
}

fn default_trend_window() -> usize {
    3
}

/// User settings for finsight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many top categories reports show by default
    #[serde(default = "default_top_n")]
    pub top_categories: usize,

    /// Periods a trend is judged over by default
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            top_categories: default_top_n(),
            trend_window: default_trend_window(),
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults on first run
    pub fn load_or_create(paths: &FinsightPaths) -> Result<Self, FinsightError> {
        let path = paths.settings_file();

        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> Result<(), FinsightError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.top_categories, 3);
        assert_eq!(settings.trend_window, 3);
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        assert!(!paths.is_initialized());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.is_initialized());
        assert_eq!(settings.top_categories, 3);

        // Second load reads the same file
        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.schema_version, settings.schema_version);
    }

    #[test]
    fn test_save_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut settings = Settings::default();
        settings.top_categories = 5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.top_categories, 5);
    }
}
