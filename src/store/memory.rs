//! In-memory record store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::calendar::HolidayEntry;
use crate::error::{EngineError, EngineResult};
use crate::models::{Official, OrderRecord};

use super::RecordStore;

/// A [`RecordStore`] held entirely in memory.
///
/// Used by the server binary and by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    orders: RwLock<BTreeMap<u64, OrderRecord>>,
    officials: RwLock<HashMap<u64, Official>>,
    holidays: RwLock<Vec<HolidayEntry>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a holiday list.
    pub fn with_holidays(holidays: Vec<HolidayEntry>) -> Self {
        Self {
            holidays: RwLock::new(holidays),
            ..Self::default()
        }
    }

}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn fetch_holidays(&self) -> EngineResult<Vec<HolidayEntry>> {
        Ok(self.holidays.read().await.clone())
    }

    async fn fetch_order(&self, order_number: u64) -> EngineResult<Option<OrderRecord>> {
        Ok(self.orders.read().await.get(&order_number).cloned())
    }

    async fn fetch_orders(&self) -> EngineResult<Vec<OrderRecord>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn insert_order(&self, order: OrderRecord) -> EngineResult<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.order_number) {
            return Err(EngineError::DuplicateOrder {
                order_number: order.order_number,
            });
        }
        debug!(order_number = order.order_number, "Inserting order");
        orders.insert(order.order_number, order);
        Ok(())
    }

    async fn update_order(&self, order: OrderRecord) -> EngineResult<()> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&order.order_number) {
            Some(existing) => {
                debug!(order_number = order.order_number, "Updating order");
                *existing = order;
                Ok(())
            }
            None => Err(EngineError::OrderNotFound {
                order_number: order.order_number,
            }),
        }
    }

    async fn fetch_official(&self, identification_number: u64) -> EngineResult<Option<Official>> {
        Ok(self
            .officials
            .read()
            .await
            .get(&identification_number)
            .cloned())
    }

    async fn upsert_official(&self, official: Official) -> EngineResult<()> {
        self.officials
            .write()
            .await
            .insert(official.identification_number, official);
        Ok(())
    }
}
