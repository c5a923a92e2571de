//! The record store port.
//!
//! Orders, officials and the holiday list live in an external record store.
//! The service layer talks to it only through [`RecordStore`], so the
//! calculator can be exercised against [`InMemoryStore`] or any other backend.

mod memory;

use async_trait::async_trait;

use crate::calendar::HolidayEntry;
use crate::error::EngineResult;
use crate::models::{Official, OrderRecord};

pub use memory::InMemoryStore;

/// Persistent storage for orders, officials and holidays.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every holiday entry in the store.
    ///
    /// Returns [`EngineError::StoreUnavailable`](crate::error::EngineError::StoreUnavailable)
    /// when the holiday list cannot be read.
    async fn fetch_holidays(&self) -> EngineResult<Vec<HolidayEntry>>;

    /// A single order, or `None` if no order has that number.
    async fn fetch_order(&self, order_number: u64) -> EngineResult<Option<OrderRecord>>;

    /// Every order, ordered by order number.
    async fn fetch_orders(&self) -> EngineResult<Vec<OrderRecord>>;

    /// Stores a new order; fails with `DuplicateOrder` if the number is taken.
    async fn insert_order(&self, order: OrderRecord) -> EngineResult<()>;

    /// Replaces an existing order; fails with `OrderNotFound` if absent.
    async fn update_order(&self, order: OrderRecord) -> EngineResult<()>;

    /// An official by identification number.
    async fn fetch_official(&self, identification_number: u64) -> EngineResult<Option<Official>>;

    /// Creates or replaces an official.
    async fn upsert_official(&self, official: Official) -> EngineResult<()>;
}
