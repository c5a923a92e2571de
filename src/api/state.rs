//! Application state for the commission deadline API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::OrderService;

/// Shared application state.
///
/// Holds the order service, which in turn owns the record store, the clock
/// and the deadline rules.
#[derive(Clone)]
pub struct AppState {
    service: Arc<OrderService>,
}

impl AppState {
    /// Creates a new application state around an order service.
    pub fn new(service: OrderService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the order service.
    pub fn service(&self) -> &OrderService {
        &self.service
    }
}
