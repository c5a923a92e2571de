//! Commission order models.
//!
//! [`OrderRecord`] is the order as the record store keeps it, dates as text.
//! [`Order`] is the typed view the calculator works on; converting one into
//! the other is the only place stored order dates are parsed.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{format_date, parse_date};
use crate::error::{EngineError, EngineResult};

use super::derived_fields::DerivedFieldsRecord;
use super::legalization::LegalizationRecord;

/// The literal stored in a date field of a cancelled order.
pub const VOIDED_MARKER: &str = "ANULADA";

/// A start or end date that may instead mark the order as voided.
///
/// # Example
///
/// ```
/// use commission_deadlines::models::OrderDate;
/// use chrono::NaiveDate;
///
/// assert_eq!(OrderDate::parse("ANULADA").unwrap(), OrderDate::Voided);
/// assert_eq!(
///     OrderDate::parse("10/01/2025").unwrap(),
///     OrderDate::Active(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDate {
    /// The order was cancelled.
    Voided,
    /// A real calendar date.
    Active(NaiveDate),
}

impl OrderDate {
    /// Parses a stored date field, recognising the voided marker.
    pub fn parse(value: &str) -> EngineResult<Self> {
        if value.trim().eq_ignore_ascii_case(VOIDED_MARKER) {
            Ok(OrderDate::Voided)
        } else {
            parse_date(value).map(OrderDate::Active)
        }
    }

    /// Reads a date field of an order already in the record store.
    ///
    /// A blank field carries no date and is read as voided, like the marker.
    /// New input goes through [`OrderDate::parse`], which rejects blanks.
    pub fn from_stored(value: &str) -> EngineResult<Self> {
        if value.trim().is_empty() {
            Ok(OrderDate::Voided)
        } else {
            Self::parse(value)
        }
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDate::Voided => f.write_str(VOIDED_MARKER),
            OrderDate::Active(date) => f.write_str(&format_date(*date)),
        }
    }
}

/// The official (public servant) sent on commission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    /// National identification number.
    pub identification_number: u64,
    /// First given name.
    pub first_name: String,
    /// Any further given names.
    #[serde(default)]
    pub other_names: String,
    /// First surname.
    pub first_surname: String,
    /// Second surname.
    #[serde(default)]
    pub second_surname: String,
}

impl Official {
    /// Returns a copy with every name trimmed and upper-cased, as stored.
    pub fn normalized(&self) -> Self {
        Self {
            identification_number: self.identification_number,
            first_name: normalize_text(&self.first_name),
            other_names: normalize_text(&self.other_names),
            first_surname: normalize_text(&self.first_surname),
            second_surname: normalize_text(&self.second_surname),
        }
    }
}

/// Trims and upper-cases free text the way the registration forms store it.
pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_uppercase()
}

/// A commission order as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique, positive order number.
    pub order_number: u64,
    /// Regional office issuing the order.
    #[serde(default)]
    pub site: String,
    /// Date the order was drawn up.
    #[serde(default)]
    pub issue_date: String,
    /// Date of the authorising memorandum.
    #[serde(default)]
    pub memo_date: String,
    /// Filing reference of the memorandum.
    #[serde(default)]
    pub memo_reference: String,
    /// Resource code.
    #[serde(default)]
    pub rec: u32,
    /// Budget line the order is charged to.
    #[serde(default)]
    pub budget_item_id: String,
    /// First day of the commission, `DD/MM/YYYY` or `ANULADA`.
    pub start_date: String,
    /// Last day of the commission, `DD/MM/YYYY` or `ANULADA`.
    pub end_date: String,
    /// Days of commission.
    #[serde(default)]
    pub number_of_days: u32,
    /// Allowance per day.
    #[serde(default)]
    pub daily_allowance: Decimal,
    /// Allowance granted for the whole order.
    #[serde(default)]
    pub order_allowance_total: Decimal,
    /// Expenses granted for the whole order.
    #[serde(default)]
    pub order_expense_total: Decimal,
    /// The official on commission.
    pub official: Official,
    /// Legalization data, once entered.
    #[serde(default)]
    pub legalization: LegalizationRecord,
    /// Last computed derived fields.
    #[serde(default)]
    pub derived: DerivedFieldsRecord,
}

/// The typed view of an order used by the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique, positive order number.
    pub order_number: u64,
    /// First day of the commission.
    pub start_date: OrderDate,
    /// Last day of the commission.
    pub end_date: OrderDate,
    /// Present once the order has been legalized.
    pub legalization_date: Option<NaiveDate>,
    /// Allowance per day.
    pub daily_allowance: Decimal,
    /// Allowance granted for the whole order.
    pub order_allowance_total: Decimal,
    /// Expenses granted for the whole order.
    pub order_expense_total: Decimal,
    /// Allowance actually used.
    pub legalized_allowance_total: Option<Decimal>,
    /// Expenses actually incurred.
    pub legalized_expense_total: Option<Decimal>,
}

impl TryFrom<&OrderRecord> for Order {
    type Error = EngineError;

    fn try_from(record: &OrderRecord) -> EngineResult<Self> {
        Ok(Order {
            order_number: record.order_number,
            start_date: OrderDate::from_stored(&record.start_date)?,
            end_date: OrderDate::from_stored(&record.end_date)?,
            legalization_date: parse_optional_date(
                record.legalization.legalization_date.as_deref(),
            )?,
            daily_allowance: record.daily_allowance,
            order_allowance_total: record.order_allowance_total,
            order_expense_total: record.order_expense_total,
            legalized_allowance_total: record.legalization.legalized_allowance_total,
            legalized_expense_total: record.legalization.legalized_expense_total,
        })
    }
}

/// Parses an optional stored date; a missing or blank value is `None`.
pub(crate) fn parse_optional_date(value: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text).map(Some),
    }
}
