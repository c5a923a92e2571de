//! On-time / late determination.

use chrono::NaiveDate;

use crate::models::LegalizationStatus;

/// Decides whether an order is on time.
///
/// A legalized order is compared by its legalization date; a pending order is
/// compared by `today`. The order is late only when a deadline exists and the
/// compared date falls after it. With no deadline the order is on time.
///
/// # Example
///
/// ```
/// use commission_deadlines::calculation::determine_legalization_status;
/// use commission_deadlines::models::LegalizationStatus;
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2025, 1, 17);
/// let today = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
///
/// // Pending and past the deadline
/// assert_eq!(determine_legalization_status(None, deadline, today), LegalizationStatus::Late);
///
/// // Legalized on the deadline, checked later
/// let legalized = NaiveDate::from_ymd_opt(2025, 1, 17);
/// assert_eq!(determine_legalization_status(legalized, deadline, today), LegalizationStatus::OnTime);
/// ```
pub fn determine_legalization_status(
    legalization_date: Option<NaiveDate>,
    legalization_deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> LegalizationStatus {
    let compared = legalization_date.unwrap_or(today);
    match legalization_deadline {
        Some(deadline) if compared > deadline => LegalizationStatus::Late,
        _ => LegalizationStatus::OnTime,
    }
}
