//! The derived-field calculator.
//!
//! Combines business-day projection, remaining-day counting, alert
//! classification, status determination and the legalized total into one
//! [`DerivedFields`] value, recording an [`AuditStep`] for each rule applied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::calendar::{HolidaySet, format_date, format_optional_date, project_business_days};
use crate::config::DeadlineRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, DerivedFields, Order, OrderDate, OrderRecord};

use super::alert::classify_alert;
use super::legalization_status::determine_legalization_status;
use super::legalized_total::legalized_order_total;
use super::remaining_days::remaining_legalization_days;

/// Warning code emitted when a calculation error forces the safe default.
pub const CALCULATION_FALLBACK: &str = "CALCULATION_FALLBACK";

/// Warning code emitted when a stored order's dates cannot be parsed.
pub const UNPARSABLE_ORDER: &str = "UNPARSABLE_ORDER";

/// The outcome of a derived-field calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFieldsResult {
    /// The computed fields, or the safe default after a failure.
    pub fields: DerivedFields,
    /// One step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Problems that forced a fallback.
    pub warnings: Vec<AuditWarning>,
}

impl DerivedFieldsResult {
    /// The safe default for an order whose dates could not be read.
    ///
    /// Logs the error and carries it as an [`UNPARSABLE_ORDER`] warning.
    pub fn unparsable(order_number: u64, err: &EngineError) -> Self {
        warn!(
            order_number,
            error = %err,
            "Order dates are unparsable, using safe defaults"
        );
        Self::fallback(
            Vec::new(),
            AuditWarning::new(UNPARSABLE_ORDER, err.to_string(), "high"),
        )
    }

    fn fallback(audit_steps: Vec<AuditStep>, warning: AuditWarning) -> Self {
        Self {
            fields: DerivedFields::safe_default(),
            audit_steps,
            warnings: vec![warning],
        }
    }
}

/// Computes the derived fields of an order.
///
/// The calculation never fails: any internal error is logged and the safe
/// default record is returned along with a [`CALCULATION_FALLBACK`] warning.
///
/// A voided end date yields no dates, no remaining days and no alert, but the
/// legalized total is still computed.
///
/// # Example
///
/// ```
/// use commission_deadlines::calculation::calculate_derived_fields;
/// use commission_deadlines::calendar::HolidaySet;
/// use commission_deadlines::config::DeadlineRules;
/// use commission_deadlines::models::{Alert, Order, OrderDate};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let order = Order {
///     order_number: 1,
///     start_date: OrderDate::parse("06/01/2025").unwrap(),
///     end_date: OrderDate::parse("10/01/2025").unwrap(),
///     legalization_date: None,
///     daily_allowance: Decimal::ZERO,
///     order_allowance_total: Decimal::ZERO,
///     order_expense_total: Decimal::ZERO,
///     legalized_allowance_total: None,
///     legalized_expense_total: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
/// let result = calculate_derived_fields(&order, &HolidaySet::new(), today, &DeadlineRules::default());
///
/// assert_eq!(result.fields.reintegration_date, NaiveDate::from_ymd_opt(2025, 1, 13));
/// assert_eq!(result.fields.legalization_deadline, NaiveDate::from_ymd_opt(2025, 1, 17));
/// assert_eq!(result.fields.alert, Alert::SufficientTime);
/// ```
pub fn calculate_derived_fields(
    order: &Order,
    holidays: &HolidaySet,
    today: NaiveDate,
    rules: &DeadlineRules,
) -> DerivedFieldsResult {
    let mut audit_steps = Vec::new();
    match derive(order, holidays, today, rules, &mut audit_steps) {
        Ok(fields) => {
            debug!(
                order_number = order.order_number,
                alert = %fields.alert,
                status = %fields.legalization_status,
                "Derived fields calculated"
            );
            DerivedFieldsResult {
                fields,
                audit_steps,
                warnings: Vec::new(),
            }
        }
        Err(err) => {
            warn!(
                order_number = order.order_number,
                error = %err,
                "Derived-field calculation failed, using safe defaults"
            );
            DerivedFieldsResult::fallback(
                audit_steps,
                AuditWarning::new(CALCULATION_FALLBACK, err.to_string(), "high"),
            )
        }
    }
}

/// Computes the derived fields of a stored order.
///
/// A blank start or end date reads as voided. Stored dates that cannot be
/// parsed produce the safe default record and an [`UNPARSABLE_ORDER`] warning.
pub fn calculate_for_record(
    record: &OrderRecord,
    holidays: &HolidaySet,
    today: NaiveDate,
    rules: &DeadlineRules,
) -> DerivedFieldsResult {
    match Order::try_from(record) {
        Ok(order) => calculate_derived_fields(&order, holidays, today, rules),
        Err(err) => DerivedFieldsResult::unparsable(record.order_number, &err),
    }
}

/// Computes derived fields with the default deadline rules, discarding the trace.
pub fn derive_fields(order: &Order, holidays: &HolidaySet, today: NaiveDate) -> DerivedFields {
    calculate_derived_fields(order, holidays, today, &DeadlineRules::default()).fields
}

fn derive(
    order: &Order,
    holidays: &HolidaySet,
    today: NaiveDate,
    rules: &DeadlineRules,
    steps: &mut Vec<AuditStep>,
) -> EngineResult<DerivedFields> {
    let end_date = match order.end_date {
        OrderDate::Active(date) => date,
        OrderDate::Voided => {
            push_step(
                steps,
                "voided_order",
                "Voided Order",
                json!({ "end_date": order.end_date.to_string() }),
                json!({ "dates": null, "alert": "NONE" }),
                "End date is voided; no deadlines apply".to_string(),
            );
            let legalized_order_total = legalized_total_step(order, steps)?;
            return Ok(DerivedFields {
                legalized_order_total,
                ..DerivedFields::safe_default()
            });
        }
    };

    let reintegration_date =
        project_business_days(end_date, rules.reintegration_business_days, holidays);
    push_step(
        steps,
        "reintegration_date",
        "Reintegration Date",
        json!({
            "end_date": format_date(end_date),
            "business_days": rules.reintegration_business_days
        }),
        json!({ "reintegration_date": format_optional_date(reintegration_date) }),
        format!(
            "{} business day(s) after {}",
            rules.reintegration_business_days,
            format_date(end_date)
        ),
    );

    let legalization_deadline = match order.start_date {
        OrderDate::Active(_) => {
            project_business_days(end_date, rules.legalization_business_days, holidays)
        }
        OrderDate::Voided => None,
    };
    push_step(
        steps,
        "legalization_deadline",
        "Legalization Deadline",
        json!({
            "start_date": order.start_date.to_string(),
            "end_date": format_date(end_date),
            "business_days": rules.legalization_business_days
        }),
        json!({ "legalization_deadline": format_optional_date(legalization_deadline) }),
        match order.start_date {
            OrderDate::Active(_) => format!(
                "{} business day(s) after {}",
                rules.legalization_business_days,
                format_date(end_date)
            ),
            OrderDate::Voided => "Start date is voided; no legalization deadline".to_string(),
        },
    );

    let remaining = match (order.legalization_date, legalization_deadline, order.start_date) {
        (None, Some(deadline), OrderDate::Active(start)) => {
            Some(remaining_legalization_days(start, deadline, today, holidays))
        }
        _ => None,
    };
    push_step(
        steps,
        "remaining_legalization_days",
        "Remaining Legalization Days",
        json!({
            "today": format_date(today),
            "legalization_date": format_optional_date(order.legalization_date),
            "legalization_deadline": format_optional_date(legalization_deadline)
        }),
        json!({ "remaining_legalization_days": remaining }),
        match remaining {
            Some(days) => format!("{} business day(s) left before the deadline", days),
            None if order.legalization_date.is_some() => "Order already legalized".to_string(),
            None => "No deadline to count towards".to_string(),
        },
    );

    let alert = classify_alert(remaining, rules.due_soon_threshold_days);
    push_step(
        steps,
        "alert",
        "Alert Classification",
        json!({
            "remaining_legalization_days": remaining,
            "due_soon_threshold_days": rules.due_soon_threshold_days
        }),
        json!({ "alert": alert }),
        format!("Classified as {}", alert),
    );

    let legalization_status =
        determine_legalization_status(order.legalization_date, legalization_deadline, today);
    let compared = order.legalization_date.unwrap_or(today);
    push_step(
        steps,
        "legalization_status",
        "Legalization Status",
        json!({
            "compared_date": format_date(compared),
            "legalization_deadline": format_optional_date(legalization_deadline)
        }),
        json!({ "legalization_status": legalization_status }),
        format!(
            "{} compared against deadline '{}'",
            format_date(compared),
            format_optional_date(legalization_deadline)
        ),
    );

    let legalized_order_total = legalized_total_step(order, steps)?;

    Ok(DerivedFields {
        reintegration_date,
        legalization_deadline,
        remaining_legalization_days: remaining,
        alert,
        legalization_status,
        legalized_order_total,
    })
}

fn legalized_total_step(
    order: &Order,
    steps: &mut Vec<AuditStep>,
) -> EngineResult<Option<rust_decimal::Decimal>> {
    let total = legalized_order_total(
        order.legalized_allowance_total,
        order.legalized_expense_total,
    )?;
    push_step(
        steps,
        "legalized_order_total",
        "Legalized Order Total",
        json!({
            "legalized_allowance_total": order.legalized_allowance_total,
            "legalized_expense_total": order.legalized_expense_total
        }),
        json!({ "legalized_order_total": total }),
        match total {
            Some(sum) => format!("Legalized allowance plus expenses = {}", sum),
            None => "Nothing legalized".to_string(),
        },
    );
    Ok(total)
}

fn push_step(
    steps: &mut Vec<AuditStep>,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) {
    let step_number = steps.len() as u32 + 1;
    steps.push(AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    });
}
