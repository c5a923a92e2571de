//! Order workflows over the record store.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::{DerivedFieldsResult, calculate_derived_fields, calculate_for_record};
use crate::calendar::{Clock, HolidaySet, format_date};
use crate::config::DeadlineRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    LegalizationInput, LegalizationRecord, Official, Order, OrderRecord, normalize_text,
};
use crate::store::RecordStore;

use super::validation::{validate_legalization, validate_order};

/// One order the bulk recalculation could not write back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// The order that failed.
    pub order_number: u64,
    /// Why it failed.
    pub message: String,
}

/// Outcome of [`OrderService::recalculate_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculationSummary {
    /// Orders recomputed and written back.
    pub updated: usize,
    /// Orders whose write-back failed.
    pub failures: Vec<RecordFailure>,
}

/// Registers, edits, legalizes and recomputes commission orders.
///
/// Every write recomputes the order's derived fields from the current holiday
/// list and the injected clock before saving.
pub struct OrderService {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    rules: DeadlineRules,
}

impl OrderService {
    /// Creates a service over a store and clock.
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>, rules: DeadlineRules) -> Self {
        Self { store, clock, rules }
    }

    /// The deadline rules in use.
    pub fn rules(&self) -> &DeadlineRules {
        &self.rules
    }

    /// Today's date according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Reads the holiday list.
    ///
    /// An unreachable store yields an empty set, so only weekends are
    /// excluded from business-day arithmetic.
    pub async fn load_holidays(&self) -> HolidaySet {
        match self.store.fetch_holidays().await {
            Ok(entries) => HolidaySet::from_entries(&entries),
            Err(err) => {
                warn!(error = %err, "Holiday list unavailable, counting weekends only");
                HolidaySet::new()
            }
        }
    }

    /// Derived fields for a stored-form order, without saving anything.
    pub async fn preview(&self, record: &OrderRecord) -> DerivedFieldsResult {
        let holidays = self.load_holidays().await;
        calculate_for_record(record, &holidays, self.today(), &self.rules)
    }

    /// Derived fields for a typed order, optionally overriding holidays and today.
    pub async fn preview_order(
        &self,
        order: &Order,
        holidays: Option<HolidaySet>,
        today: Option<NaiveDate>,
    ) -> DerivedFieldsResult {
        let holidays = match holidays {
            Some(set) => set,
            None => self.load_holidays().await,
        };
        let today = today.unwrap_or_else(|| self.today());
        calculate_derived_fields(order, &holidays, today, &self.rules)
    }

    /// Validates, normalizes and stores a new order with its derived fields.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ValidationFailed`] for invalid input
    /// - [`EngineError::DuplicateOrder`] if the number is taken
    /// - [`EngineError::PersistenceError`] if the store rejects the write
    pub async fn register_order(&self, record: OrderRecord) -> EngineResult<OrderRecord> {
        validate_order(&record)?;

        let mut record = normalize_order(record);
        if self.store.fetch_order(record.order_number).await?.is_some() {
            return Err(EngineError::DuplicateOrder {
                order_number: record.order_number,
            });
        }

        self.ensure_official(&record.official).await;

        record.legalization = LegalizationRecord::default();
        self.refresh_derived(&mut record).await;

        let order_number = record.order_number;
        self.store
            .insert_order(record.clone())
            .await
            .map_err(|err| persistence_error(order_number, err))?;

        info!(
            order_number,
            alert = %record.derived.alert,
            "Order registered"
        );
        Ok(record)
    }

    /// Replaces an order's data, keeping its legalization block.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ValidationFailed`] for invalid input
    /// - [`EngineError::OrderNotFound`] if no such order exists
    /// - [`EngineError::PersistenceError`] if the store rejects the write
    pub async fn edit_order(
        &self,
        order_number: u64,
        mut record: OrderRecord,
    ) -> EngineResult<OrderRecord> {
        record.order_number = order_number;
        validate_order(&record)?;

        let existing = self.get_order(order_number).await?;

        let mut record = normalize_order(record);
        record.legalization = existing.legalization;
        self.ensure_official(&record.official).await;
        self.refresh_derived(&mut record).await;

        self.store
            .update_order(record.clone())
            .await
            .map_err(|err| persistence_error(order_number, err))?;

        info!(order_number, alert = %record.derived.alert, "Order edited");
        Ok(record)
    }

    /// Records what was actually spent and recomputes the order.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OrderNotFound`] if no such order exists
    /// - [`EngineError::ValidationFailed`] if the data conflicts with the order
    /// - [`EngineError::PersistenceError`] if the store rejects the write
    pub async fn record_legalization(
        &self,
        order_number: u64,
        input: LegalizationInput,
    ) -> EngineResult<OrderRecord> {
        let mut record = self.get_order(order_number).await?;
        let legalization_date = validate_legalization(&record, &input, self.today())?;

        record.legalization = LegalizationRecord {
            legalization_date: Some(format_date(legalization_date)),
            legalization_number: Some(input.legalization_number),
            legalized_days: Some(input.legalized_days),
            legalized_allowance_total: Some(input.legalized_allowance_total),
            legalized_expense_total: Some(input.legalized_expense_total),
        };
        self.refresh_derived(&mut record).await;

        self.store
            .update_order(record.clone())
            .await
            .map_err(|err| persistence_error(order_number, err))?;

        info!(
            order_number,
            status = %record.derived.legalization_status,
            "Legalization recorded"
        );
        Ok(record)
    }

    /// Recomputes and writes back every stored order.
    ///
    /// Holidays and today are read once. A failed write is collected in the
    /// summary and the remaining orders are still processed.
    ///
    /// # Errors
    ///
    /// Fails only if the order list itself cannot be read.
    pub async fn recalculate_all(&self) -> EngineResult<RecalculationSummary> {
        let orders = self.store.fetch_orders().await?;
        let holidays = self.load_holidays().await;
        let today = self.today();

        let mut summary = RecalculationSummary::default();
        for mut record in orders {
            let order_number = record.order_number;
            let result = calculate_for_record(&record, &holidays, today, &self.rules);
            record.derived = result.fields.to_record();

            match self.store.update_order(record).await {
                Ok(()) => summary.updated += 1,
                Err(err) => {
                    warn!(order_number, error = %err, "Failed to write recomputed order");
                    summary.failures.push(RecordFailure {
                        order_number,
                        message: persistence_error(order_number, err).to_string(),
                    });
                }
            }
        }

        info!(
            updated = summary.updated,
            failed = summary.failures.len(),
            today = %format_date(today),
            "Bulk recalculation finished"
        );
        Ok(summary)
    }

    /// Fetches a stored order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OrderNotFound`] if no such order exists.
    pub async fn get_order(&self, order_number: u64) -> EngineResult<OrderRecord> {
        self.store
            .fetch_order(order_number)
            .await?
            .ok_or(EngineError::OrderNotFound { order_number })
    }

    async fn refresh_derived(&self, record: &mut OrderRecord) {
        let result = self.preview(record).await;
        record.derived = result.fields.to_record();
    }

    async fn ensure_official(&self, official: &Official) {
        let identification_number = official.identification_number;
        match self.store.fetch_official(identification_number).await {
            Ok(Some(_)) => {}
            Ok(None) => match self.store.upsert_official(official.clone()).await {
                Ok(()) => info!(identification_number, "Official created"),
                Err(err) => {
                    warn!(identification_number, error = %err, "Could not create official")
                }
            },
            Err(err) => {
                warn!(identification_number, error = %err, "Could not look up official")
            }
        }
    }
}

fn normalize_order(mut record: OrderRecord) -> OrderRecord {
    record.site = normalize_text(&record.site);
    record.memo_reference = normalize_text(&record.memo_reference);
    record.budget_item_id = normalize_text(&record.budget_item_id);
    record.start_date = record.start_date.trim().to_string();
    record.end_date = record.end_date.trim().to_string();
    record.official = record.official.normalized();
    record
}

fn persistence_error(order_number: u64, err: EngineError) -> EngineError {
    match err {
        EngineError::DuplicateOrder { .. }
        | EngineError::OrderNotFound { .. }
        | EngineError::PersistenceError { .. } => err,
        other => EngineError::PersistenceError {
            order_number,
            message: other.to_string(),
        },
    }
}
