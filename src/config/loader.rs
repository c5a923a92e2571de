//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calendar::{HolidayEntry, HolidaySet};
use crate::error::{EngineError, EngineResult};

use super::types::{DeadlineRules, EngineConfig, EngineSettings, HolidayCalendarFile};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/colombia/
/// ├── engine.yaml        # Name, country, deadline rules, server settings
/// └── holidays/
///     ├── 2025.yaml      # Holidays for one year
///     └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use commission_deadlines::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/colombia")?;
/// println!("{} holidays loaded", loader.holiday_set().len());
/// # Ok::<(), commission_deadlines::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` or the `holidays/` directory is
    /// missing, if the directory holds no holiday files, or if any file is
    /// invalid YAML. Individual holiday rows with bad dates are not an error
    /// here; they are skipped when the holiday set is built.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let holidays = Self::load_holidays(&path.join("holidays"))?;

        info!(
            config = %path.display(),
            country = %settings.country,
            holiday_rows = holidays.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayEntry>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        // Directory order is platform dependent.
        files.sort();

        let mut holidays = Vec::new();
        for file in files {
            let calendar = Self::load_yaml::<HolidayCalendarFile>(&file)?;
            holidays.extend(calendar.holidays);
        }

        Ok(holidays)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the deadline rules.
    pub fn deadline_rules(&self) -> DeadlineRules {
        self.config.deadline_rules()
    }

    /// Returns the raw holiday rows.
    pub fn holiday_entries(&self) -> &[HolidayEntry] {
        self.config.holiday_entries()
    }

    /// Builds the holiday set from the loaded rows.
    pub fn holiday_set(&self) -> HolidaySet {
        self.config.holiday_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/colombia"
    }

    #[test]
    fn test_load_valid_config() {
        let loader = ConfigLoader::load(config_path());
        assert!(loader.is_ok(), "Failed to load config: {:?}", loader.err());
    }

    #[test]
    fn test_settings_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let settings = loader.config().settings();
        assert_eq!(settings.country, "CO");
        assert_eq!(loader.deadline_rules(), DeadlineRules::default());
    }

    #[test]
    fn test_holidays_from_every_file_are_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let holidays = loader.holiday_set();
        // Epiphany 2025 (ISO row) and Epiphany 2026 (day-first row)
        assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()));
        assert!(holidays.contains(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
        assert_eq!(holidays.len(), 35);
    }

    #[test]
    fn test_load_missing_directory() {
        let result = ConfigLoader::load("./nonexistent/path");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_missing_engine_file_reports_path() {
        match ConfigLoader::load("./nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("engine.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
