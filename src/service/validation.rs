//! Validation of submitted orders and legalization data.
//!
//! Every check runs; all problems are reported together in a single
//! [`EngineError::ValidationFailed`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LegalizationInput, OrderDate, OrderRecord, parse_optional_date};

/// Checks an order submitted for registration or edit.
///
/// # Errors
///
/// Returns [`EngineError::ValidationFailed`] listing every problem found.
pub fn validate_order(record: &OrderRecord) -> EngineResult<()> {
    let mut errors = Vec::new();

    if record.order_number == 0 {
        errors.push("Order number must be greater than 0".to_string());
    }
    if record.rec == 0 {
        errors.push("REC must be greater than 0".to_string());
    }

    let start = check_order_date("Start date", &record.start_date, &mut errors);
    let end = check_order_date("End date", &record.end_date, &mut errors);
    if let (Some(OrderDate::Active(start)), Some(OrderDate::Active(end))) = (start, end) {
        if end < start {
            errors.push("End date must not be before the start date".to_string());
        }
    }

    check_non_negative("Daily allowance", record.daily_allowance, &mut errors);
    check_non_negative("Order allowance total", record.order_allowance_total, &mut errors);
    check_non_negative("Order expense total", record.order_expense_total, &mut errors);

    if record.official.identification_number == 0 {
        errors.push("Identification number is required".to_string());
    }
    if record.official.first_name.trim().is_empty() {
        errors.push("First name is required".to_string());
    }
    if record.official.first_surname.trim().is_empty() {
        errors.push("First surname is required".to_string());
    }

    finish(errors)
}

/// Checks legalization data against the order it legalizes.
///
/// Returns the legalization date to store, `today` when none was given.
///
/// # Errors
///
/// Returns [`EngineError::ValidationFailed`] listing every problem found.
pub fn validate_legalization(
    order: &OrderRecord,
    input: &LegalizationInput,
    today: NaiveDate,
) -> EngineResult<NaiveDate> {
    let mut errors = Vec::new();

    if input.legalization_number == 0 {
        errors.push("Legalization number must be greater than 0".to_string());
    }
    if input.legalized_days > order.number_of_days {
        errors.push(format!(
            "Legalized days ({}) exceed the order's days ({})",
            input.legalized_days, order.number_of_days
        ));
    }

    check_non_negative(
        "Legalized allowance total",
        input.legalized_allowance_total,
        &mut errors,
    );
    if input.legalized_allowance_total > order.order_allowance_total {
        errors.push(format!(
            "Legalized allowance total ({}) exceeds the order's allowance total ({})",
            input.legalized_allowance_total, order.order_allowance_total
        ));
    }

    check_non_negative(
        "Legalized expense total",
        input.legalized_expense_total,
        &mut errors,
    );
    if input.legalized_expense_total > order.order_expense_total {
        errors.push(format!(
            "Legalized expense total ({}) exceeds the order's expense total ({})",
            input.legalized_expense_total, order.order_expense_total
        ));
    }

    let legalization_date = match parse_optional_date(input.legalization_date.as_deref()) {
        Ok(date) => date.unwrap_or(today),
        Err(err) => {
            errors.push(format!("Legalization date: {}", err));
            today
        }
    };

    finish(errors).map(|()| legalization_date)
}

fn check_order_date(label: &str, value: &str, errors: &mut Vec<String>) -> Option<OrderDate> {
    match OrderDate::parse(value) {
        Ok(date) => Some(date),
        Err(err) => {
            errors.push(format!("{}: {}", label, err));
            None
        }
    }
}

fn check_non_negative(label: &str, value: Decimal, errors: &mut Vec<String>) {
    if value.is_sign_negative() && !value.is_zero() {
        errors.push(format!("{} must not be negative", label));
    }
}

fn finish(errors: Vec<String>) -> EngineResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::ValidationFailed { errors })
    }
}
