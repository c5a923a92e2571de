//! HTTP API module for the commission deadline engine.
//!
//! This module provides the REST API endpoints for previewing derived
//! fields, registering and editing orders, recording legalizations and
//! running the bulk recalculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeriveOrder, DeriveRequest};
pub use response::{ApiError, AuditTrace, DeriveResponse};
pub use state::AppState;
