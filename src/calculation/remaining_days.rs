//! Remaining legalization business days.

use chrono::NaiveDate;

use crate::calendar::{HolidaySet, count_business_days};

/// Business days left before the legalization deadline.
///
/// Computed as the business days from `start_date` to the deadline minus the
/// business days from `start_date` to `today`, both inclusive. Negative once
/// the deadline has passed.
///
/// # Example
///
/// ```
/// use commission_deadlines::calculation::remaining_legalization_days;
/// use commission_deadlines::calendar::HolidaySet;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let deadline = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// assert_eq!(remaining_legalization_days(start, deadline, today, &HolidaySet::new()), 0);
/// ```
pub fn remaining_legalization_days(
    start_date: NaiveDate,
    legalization_deadline: NaiveDate,
    today: NaiveDate,
    holidays: &HolidaySet,
) -> i64 {
    let total = count_business_days(start_date, legalization_deadline, holidays);
    let elapsed = count_business_days(start_date, today, holidays);
    i64::from(total) - i64::from(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_deadline_today_leaves_zero() {
        let remaining =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 10), &HolidaySet::new());
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_days_left_before_deadline() {
        // Elapsed: Jan 1, 2, 3, 6 (4 days); total: 8 days
        let remaining =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 6), &HolidaySet::new());
        assert_eq!(remaining, 4);
    }

    #[test]
    fn test_deadline_passed_is_negative() {
        let remaining =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 14), &HolidaySet::new());
        assert_eq!(remaining, -2);
    }

    #[test]
    fn test_weekend_after_deadline_does_not_change_count() {
        let holidays = HolidaySet::new();
        let saturday =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 11), &holidays);
        let sunday =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 12), &holidays);
        assert_eq!(saturday, 0);
        assert_eq!(sunday, 0);
    }

    #[test]
    fn test_today_before_start_counts_nothing_elapsed() {
        let remaining =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2024, 12, 20), &HolidaySet::new());
        assert_eq!(remaining, 8);
    }

    #[test]
    fn test_holidays_reduce_total() {
        let holidays = HolidaySet::from_date_strings(["2025-01-06"]);
        let remaining =
            remaining_legalization_days(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 3), &holidays);
        // Total 7 (Jan 6 excluded), elapsed 3
        assert_eq!(remaining, 4);
    }
}
