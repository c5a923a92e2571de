//! Legalization data: what was actually spent on a commission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legalization block of a stored order.
///
/// Every field is absent until legalization data is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalizationRecord {
    /// Date legalization was reported, `DD/MM/YYYY`.
    #[serde(default)]
    pub legalization_date: Option<String>,
    /// Number of the legalization document.
    #[serde(default)]
    pub legalization_number: Option<u64>,
    /// Days actually spent on commission.
    #[serde(default)]
    pub legalized_days: Option<u32>,
    /// Allowance actually used.
    #[serde(default)]
    pub legalized_allowance_total: Option<Decimal>,
    /// Expenses actually incurred.
    #[serde(default)]
    pub legalized_expense_total: Option<Decimal>,
}

/// Legalization data submitted for an existing order.
///
/// # Example
///
/// ```
/// use commission_deadlines::models::LegalizationInput;
///
/// let input: LegalizationInput = serde_json::from_str(r#"{
///     "legalization_number": 88,
///     "legalized_days": 2,
///     "legalized_allowance_total": "240000",
///     "legalized_expense_total": 35000.5
/// }"#).unwrap();
/// assert!(input.legalization_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalizationInput {
    /// When legalization happened; today when omitted.
    #[serde(default)]
    pub legalization_date: Option<String>,
    /// Number of the legalization document.
    pub legalization_number: u64,
    /// Days actually spent on commission.
    pub legalized_days: u32,
    /// Allowance actually used.
    pub legalized_allowance_total: Decimal,
    /// Expenses actually incurred.
    pub legalized_expense_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_from_empty_object() {
        let record: LegalizationRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, LegalizationRecord::default());
    }
}
