//! Order workflows: registration, edit, legalization and bulk recalculation.
//!
//! [`OrderService`] sits between the HTTP layer and the record store and is the
//! only place derived fields are written back.

mod orders;
mod validation;

pub use orders::{OrderService, RecalculationSummary, RecordFailure};
pub use validation::{validate_legalization, validate_order};
