//! Request types for the commission deadline API.
//!
//! Order registration, edit and legalization bodies reuse
//! [`OrderRecord`](crate::models::OrderRecord) and
//! [`LegalizationInput`](crate::models::LegalizationInput) directly; this
//! module defines the stateless `/derive` request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{HolidaySet, parse_date};
use crate::error::EngineResult;
use crate::models::{Order, OrderDate, parse_optional_date};

/// Request body for the `/derive` endpoint.
///
/// Holidays and today default to the stored holiday list and the server
/// clock when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveRequest {
    /// The order to derive fields for.
    pub order: DeriveOrder,
    /// Explicit holiday dates, either supported format.
    #[serde(default)]
    pub holidays: Option<Vec<String>>,
    /// Explicit "today", either supported format.
    #[serde(default)]
    pub today: Option<String>,
}

/// The order fields the calculator reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveOrder {
    /// Order number, echoed back.
    #[serde(default)]
    pub order_number: u64,
    /// `DD/MM/YYYY`, `YYYY-MM-DD` or `ANULADA`; blank reads as `ANULADA`.
    pub start_date: String,
    /// `DD/MM/YYYY`, `YYYY-MM-DD` or `ANULADA`; blank reads as `ANULADA`.
    pub end_date: String,
    /// Present once legalized.
    #[serde(default)]
    pub legalization_date: Option<String>,
    /// Allowance per day.
    #[serde(default)]
    pub daily_allowance: Decimal,
    /// Allowance granted for the whole order.
    #[serde(default)]
    pub order_allowance_total: Decimal,
    /// Expenses granted for the whole order.
    #[serde(default)]
    pub order_expense_total: Decimal,
    /// Allowance actually used.
    #[serde(default)]
    pub legalized_allowance_total: Option<Decimal>,
    /// Expenses actually incurred.
    #[serde(default)]
    pub legalized_expense_total: Option<Decimal>,
}

impl TryFrom<DeriveOrder> for Order {
    type Error = crate::error::EngineError;

    fn try_from(request: DeriveOrder) -> EngineResult<Self> {
        Ok(Order {
            order_number: request.order_number,
            start_date: OrderDate::from_stored(&request.start_date)?,
            end_date: OrderDate::from_stored(&request.end_date)?,
            legalization_date: parse_optional_date(request.legalization_date.as_deref())?,
            daily_allowance: request.daily_allowance,
            order_allowance_total: request.order_allowance_total,
            order_expense_total: request.order_expense_total,
            legalized_allowance_total: request.legalized_allowance_total,
            legalized_expense_total: request.legalized_expense_total,
        })
    }
}

impl DeriveRequest {
    /// The explicit holiday set, if one was sent.
    pub fn holiday_set(&self) -> Option<HolidaySet> {
        self.holidays
            .as_ref()
            .map(|dates| HolidaySet::from_date_strings(dates))
    }

    /// The explicit "today", if one was sent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if the value does not parse.
    pub fn today(&self) -> EngineResult<Option<NaiveDate>> {
        self.today.as_deref().map(parse_date).transpose()
    }
}
