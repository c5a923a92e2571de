//! Legalized order total.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Sums the legalized allowance and legalized expenses.
///
/// An absent amount counts as zero. When both amounts are absent or zero the
/// total is absent, so an order legalized for exactly nothing reads the same
/// as one not yet legalized. Stored data depends on that reading.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the sum overflows.
///
/// # Example
///
/// ```
/// use commission_deadlines::calculation::legalized_order_total;
/// use rust_decimal::Decimal;
///
/// let total = legalized_order_total(Some(Decimal::new(240_000, 0)), None).unwrap();
/// assert_eq!(total, Some(Decimal::new(240_000, 0)));
/// assert_eq!(legalized_order_total(None, None).unwrap(), None);
/// ```
pub fn legalized_order_total(
    legalized_allowance_total: Option<Decimal>,
    legalized_expense_total: Option<Decimal>,
) -> EngineResult<Option<Decimal>> {
    let allowance = legalized_allowance_total.unwrap_or(Decimal::ZERO);
    let expense = legalized_expense_total.unwrap_or(Decimal::ZERO);

    if allowance.is_zero() && expense.is_zero() {
        return Ok(None);
    }

    allowance
        .checked_add(expense)
        .map(Some)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "legalized total overflows: {} + {}",
                allowance, expense
            ),
        })
}
