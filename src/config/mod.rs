//! Configuration loading for the commission deadline engine.
//!
//! This module loads deadline rules, server settings and the national holiday
//! calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use commission_deadlines::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/colombia").unwrap();
//! println!("Legalization due after {} business days",
//!     config.deadline_rules().legalization_business_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeadlineRules, EngineConfig, EngineSettings, HolidayCalendarFile, ServerConfig};
