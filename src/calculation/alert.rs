//! Alert classification from the remaining legalization days.

use crate::models::Alert;

/// Remaining business days at or below which an order is flagged as due soon.
pub const DEFAULT_DUE_SOON_THRESHOLD_DAYS: i64 = 2;

/// Classifies the urgency of an order.
///
/// - absent remaining days → [`Alert::None`]
/// - negative → [`Alert::Overdue`]
/// - `0..=due_soon_threshold` → [`Alert::DueSoon`]
/// - above the threshold → [`Alert::SufficientTime`]
///
/// # Example
///
/// ```
/// use commission_deadlines::calculation::{classify_alert, DEFAULT_DUE_SOON_THRESHOLD_DAYS};
/// use commission_deadlines::models::Alert;
///
/// assert_eq!(classify_alert(Some(-1), DEFAULT_DUE_SOON_THRESHOLD_DAYS), Alert::Overdue);
/// assert_eq!(classify_alert(Some(2), DEFAULT_DUE_SOON_THRESHOLD_DAYS), Alert::DueSoon);
/// assert_eq!(classify_alert(Some(3), DEFAULT_DUE_SOON_THRESHOLD_DAYS), Alert::SufficientTime);
/// assert_eq!(classify_alert(None, DEFAULT_DUE_SOON_THRESHOLD_DAYS), Alert::None);
/// ```
pub fn classify_alert(remaining_days: Option<i64>, due_soon_threshold: i64) -> Alert {
    match remaining_days {
        None => Alert::None,
        Some(days) if days < 0 => Alert::Overdue,
        Some(days) if days <= due_soon_threshold => Alert::DueSoon,
        Some(_) => Alert::SufficientTime,
    }
}
