//! Calculation logic for the commission deadline engine.
//!
//! This module contains the rules that turn an order into its derived
//! legalization fields: remaining-day counting, alert classification,
//! on-time / late determination, the legalized total, and the calculator
//! that combines them with the business-day calendar.

mod alert;
mod derived_fields;
mod legalization_status;
mod legalized_total;
mod remaining_days;

pub use alert::{DEFAULT_DUE_SOON_THRESHOLD_DAYS, classify_alert};
pub use derived_fields::{
    CALCULATION_FALLBACK, DerivedFieldsResult, UNPARSABLE_ORDER, calculate_derived_fields,
    calculate_for_record, derive_fields,
};
pub use legalization_status::determine_legalization_status;
pub use legalized_total::legalized_order_total;
pub use remaining_days::remaining_legalization_days;
