//! Error types for the commission deadline engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Recoverable calendar failures (unparsable dates, unreachable holiday source)
//! are handled close to where they occur; the variants here are what escapes
//! to callers of the service and API layers.

use thiserror::Error;

/// The main error type for the commission deadline engine.
///
/// # Example
///
/// ```
/// use commission_deadlines::error::EngineError;
///
/// let error = EngineError::OrderNotFound { order_number: 42 };
/// assert_eq!(error.to_string(), "Order #42 not found");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string was in neither `DD/MM/YYYY` nor `YYYY-MM-DD` form.
    #[error("Invalid date '{value}': expected DD/MM/YYYY or YYYY-MM-DD")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
    },

    /// Submitted order or legalization data failed validation.
    #[error("Validation failed: {}", .errors.join("; "))]
    ValidationFailed {
        /// Every problem found, in field order.
        errors: Vec<String>,
    },

    /// No order with the given number exists in the record store.
    #[error("Order #{order_number} not found")]
    OrderNotFound {
        /// The order number that was looked up.
        order_number: u64,
    },

    /// An order with the same number is already stored.
    #[error("An order with number {order_number} already exists")]
    DuplicateOrder {
        /// The conflicting order number.
        order_number: u64,
    },

    /// The record store could not be reached.
    #[error("Record store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// Writing an order back to the record store failed.
    #[error("Failed to save order #{order_number}: {message}")]
    PersistenceError {
        /// The order being written.
        order_number: u64,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
