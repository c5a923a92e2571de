//! Derived legalization fields.
//!
//! [`DerivedFields`] is the typed result of the calculator; [`DerivedFieldsRecord`]
//! is the form written back to the record store, with dates rendered as
//! `DD/MM/YYYY` text.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::format_optional_date;

/// Urgency label derived from the remaining legalization business days.
///
/// Legacy labels written by the spreadsheet-era system are accepted when
/// reading records back.
///
/// # Example
///
/// ```
/// use commission_deadlines::models::Alert;
///
/// let alert: Alert = serde_json::from_str("\"Plazo Próximo\"").unwrap();
/// assert_eq!(alert, Alert::DueSoon);
/// assert_eq!(serde_json::to_string(&alert).unwrap(), "\"DUE_SOON\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alert {
    /// The deadline has passed.
    #[serde(rename = "OVERDUE", alias = "Plazo Vencido")]
    Overdue,
    /// Two business days or fewer remain.
    #[serde(rename = "DUE_SOON", alias = "Plazo Próximo")]
    DueSoon,
    /// More than two business days remain.
    #[serde(rename = "SUFFICIENT_TIME", alias = "Tiempo Suficiente")]
    SufficientTime,
    /// No alert: already legalized, voided, or no deadline.
    #[default]
    #[serde(rename = "NONE", alias = "")]
    None,
}

impl Alert {
    /// The stored label.
    pub fn label(self) -> &'static str {
        match self {
            Alert::Overdue => "OVERDUE",
            Alert::DueSoon => "DUE_SOON",
            Alert::SufficientTime => "SUFFICIENT_TIME",
            Alert::None => "NONE",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether legalization happened (or can still happen) by the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalizationStatus {
    /// Legalized on or before the deadline, or the deadline has not passed.
    #[default]
    #[serde(rename = "ON_TIME", alias = "A tiempo")]
    OnTime,
    /// Legalized after the deadline, or still pending past it.
    #[serde(rename = "LATE", alias = "Atrasado")]
    Late,
}

impl LegalizationStatus {
    /// The stored label.
    pub fn label(self) -> &'static str {
        match self {
            LegalizationStatus::OnTime => "ON_TIME",
            LegalizationStatus::Late => "LATE",
        }
    }
}

impl fmt::Display for LegalizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields computed from an order, the holiday set and today's date.
///
/// Never a source of truth: recomputed on every save, edit, legalization
/// and bulk recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// One business day after the end date.
    pub reintegration_date: Option<NaiveDate>,
    /// Five business days after the end date.
    pub legalization_deadline: Option<NaiveDate>,
    /// Signed business days left; negative once the deadline has passed.
    pub remaining_legalization_days: Option<i64>,
    /// Urgency label.
    pub alert: Alert,
    /// On-time or late.
    pub legalization_status: LegalizationStatus,
    /// Legalized allowance plus legalized expenses.
    pub legalized_order_total: Option<Decimal>,
}

impl DerivedFields {
    /// The record used when a calculation cannot be completed.
    pub fn safe_default() -> Self {
        Self {
            reintegration_date: None,
            legalization_deadline: None,
            remaining_legalization_days: None,
            alert: Alert::None,
            legalization_status: LegalizationStatus::OnTime,
            legalized_order_total: None,
        }
    }

    /// Converts to the stored representation.
    pub fn to_record(&self) -> DerivedFieldsRecord {
        DerivedFieldsRecord {
            reintegration_date: format_optional_date(self.reintegration_date),
            legalization_deadline: format_optional_date(self.legalization_deadline),
            remaining_legalization_days: self.remaining_legalization_days,
            alert: self.alert,
            legalization_status: self.legalization_status,
            legalized_order_total: self.legalized_order_total,
        }
    }
}

impl Default for DerivedFields {
    fn default() -> Self {
        Self::safe_default()
    }
}

/// Derived fields as written back to the record store.
///
/// The default value is the safe-default record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFieldsRecord {
    /// `DD/MM/YYYY`, or empty when absent.
    #[serde(default)]
    pub reintegration_date: String,
    /// `DD/MM/YYYY`, or empty when absent.
    #[serde(default)]
    pub legalization_deadline: String,
    /// Nullable signed business-day count.
    #[serde(default)]
    pub remaining_legalization_days: Option<i64>,
    /// Alert label.
    #[serde(default)]
    pub alert: Alert,
    /// Status label.
    #[serde(default)]
    pub legalization_status: LegalizationStatus,
    /// Nullable legalized total.
    #[serde(default)]
    pub legalized_order_total: Option<Decimal>,
}

impl From<&DerivedFields> for DerivedFieldsRecord {
    fn from(fields: &DerivedFields) -> Self {
        fields.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_serializes_as_screaming_labels() {
        assert_eq!(serde_json::to_string(&Alert::Overdue).unwrap(), "\"OVERDUE\"");
        assert_eq!(
            serde_json::to_string(&Alert::SufficientTime).unwrap(),
            "\"SUFFICIENT_TIME\""
        );
        assert_eq!(serde_json::to_string(&Alert::None).unwrap(), "\"NONE\"");
    }

    #[test]
    fn test_alert_reads_legacy_labels() {
        let overdue: Alert = serde_json::from_str("\"Plazo Vencido\"").unwrap();
        let none: Alert = serde_json::from_str("\"\"").unwrap();
        assert_eq!(overdue, Alert::Overdue);
        assert_eq!(none, Alert::None);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LegalizationStatus::OnTime.to_string(), "ON_TIME");
        assert_eq!(LegalizationStatus::Late.label(), "LATE");
        let late: LegalizationStatus = serde_json::from_str("\"Atrasado\"").unwrap();
        assert_eq!(late, LegalizationStatus::Late);
        let on_time: LegalizationStatus = serde_json::from_str("\"A tiempo\"").unwrap();
        assert_eq!(on_time, LegalizationStatus::OnTime);
    }

    #[test]
    fn test_safe_default_record_matches_default() {
        assert_eq!(DerivedFields::safe_default().to_record(), DerivedFieldsRecord::default());
    }

    #[test]
    fn test_to_record_formats_dates_day_first() {
        let fields = DerivedFields {
            reintegration_date: NaiveDate::from_ymd_opt(2025, 1, 13),
            legalization_deadline: NaiveDate::from_ymd_opt(2025, 1, 17),
            remaining_legalization_days: Some(-2),
            alert: Alert::Overdue,
            legalization_status: LegalizationStatus::Late,
            legalized_order_total: Some(Decimal::new(150_000, 0)),
        };
        let record = fields.to_record();
        assert_eq!(record.reintegration_date, "13/01/2025");
        assert_eq!(record.legalization_deadline, "17/01/2025");
        assert_eq!(record.remaining_legalization_days, Some(-2));
        assert_eq!(record.alert, Alert::Overdue);
    }

    #[test]
    fn test_record_serialization_uses_nulls() {
        let json = serde_json::to_string(&DerivedFieldsRecord::default()).unwrap();
        assert!(json.contains("\"reintegration_date\":\"\""));
        assert!(json.contains("\"remaining_legalization_days\":null"));
        assert!(json.contains("\"alert\":\"NONE\""));
        assert!(json.contains("\"legalization_status\":\"ON_TIME\""));
        assert!(json.contains("\"legalized_order_total\":null"));
    }
}
