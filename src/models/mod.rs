//! Core data models for the commission deadline engine.
//!
//! This module contains the order, legalization, derived-field and audit
//! models used throughout the engine.

mod audit;
mod derived_fields;
mod legalization;
mod order;

pub use audit::{AuditStep, AuditWarning};
pub use derived_fields::{Alert, DerivedFields, DerivedFieldsRecord, LegalizationStatus};
pub use legalization::{LegalizationInput, LegalizationRecord};
pub use order::{Official, Order, OrderDate, OrderRecord, VOIDED_MARKER};

pub(crate) use order::{normalize_text, parse_optional_date};
