//! Configuration types for the deadline engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calendar::{HolidayEntry, HolidaySet};

/// Business-day offsets used to derive order deadlines.
///
/// # Example
///
/// ```
/// use commission_deadlines::config::DeadlineRules;
///
/// let rules = DeadlineRules::default();
/// assert_eq!(rules.reintegration_business_days, 1);
/// assert_eq!(rules.legalization_business_days, 5);
/// assert_eq!(rules.due_soon_threshold_days, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRules {
    /// Business days after the end date by which unused funds are returned.
    #[serde(default = "default_reintegration_business_days")]
    pub reintegration_business_days: u32,
    /// Business days after the end date by which legalization is due.
    #[serde(default = "default_legalization_business_days")]
    pub legalization_business_days: u32,
    /// Remaining business days at or below which an order is due soon.
    #[serde(default = "default_due_soon_threshold_days")]
    pub due_soon_threshold_days: i64,
}

fn default_reintegration_business_days() -> u32 {
    1
}

fn default_legalization_business_days() -> u32 {
    5
}

fn default_due_soon_threshold_days() -> i64 {
    2
}

impl Default for DeadlineRules {
    fn default() -> Self {
        Self {
            reintegration_business_days: default_reintegration_business_days(),
            legalization_business_days: default_legalization_business_days(),
            due_soon_threshold_days: default_due_soon_threshold_days(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address the API listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Human-readable name of this deployment.
    pub name: String,
    /// Country whose holidays are loaded.
    pub country: String,
    /// Deadline offsets.
    #[serde(default)]
    pub deadlines: DeadlineRules,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Contents of one file in the `holidays/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// Holiday rows for one year.
    pub holidays: Vec<HolidayEntry>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    settings: EngineSettings,
    holidays: Vec<HolidayEntry>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, holidays: Vec<HolidayEntry>) -> Self {
        Self { settings, holidays }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the deadline rules.
    pub fn deadline_rules(&self) -> DeadlineRules {
        self.settings.deadlines
    }

    /// Returns the raw holiday rows, in file order.
    pub fn holiday_entries(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Builds the holiday set; malformed rows are skipped.
    pub fn holiday_set(&self) -> HolidaySet {
        HolidaySet::from_entries(&self.holidays)
    }
}
