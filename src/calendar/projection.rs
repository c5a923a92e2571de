//! Deadline projection: moving a date forward by a number of business days.

use chrono::NaiveDate;
use tracing::warn;

use super::business_days::is_business_day;
use super::date_format::parse_date;
use super::holidays::HolidaySet;

/// Returns the date `business_days` business days after `start`.
///
/// Counting begins on the day after `start`; `start` itself never counts.
/// Weekends and holidays are stepped over. This is the spreadsheet
/// `WORKDAY(start, n, holidays)` rule.
///
/// Returns `start` unchanged when `business_days` is 0, and `None` only if the
/// projection would run past the last representable date.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::{project_business_days, HolidaySet};
/// use chrono::NaiveDate;
///
/// // Friday 2025-01-10 plus one business day is Monday 2025-01-13
/// let friday = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// assert_eq!(
///     project_business_days(friday, 1, &HolidaySet::new()),
///     NaiveDate::from_ymd_opt(2025, 1, 13)
/// );
/// ```
pub fn project_business_days(
    start: NaiveDate,
    business_days: u32,
    holidays: &HolidaySet,
) -> Option<NaiveDate> {
    let mut current = start;
    let mut counted = 0;

    while counted < business_days {
        current = current.succ_opt()?;
        if is_business_day(current, holidays) {
            counted += 1;
        }
    }

    Some(current)
}

/// Projects from a textual start date.
///
/// An unparsable `start` is logged and yields `None`, which callers treat as
/// an unknown deadline.
pub fn project_business_days_str(
    start: &str,
    business_days: u32,
    holidays: &HolidaySet,
) -> Option<NaiveDate> {
    match parse_date(start) {
        Ok(start) => project_business_days(start, business_days, holidays),
        Err(err) => {
            warn!(start = %start, error = %err, "Cannot project business days");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_friday_plus_one_is_monday() {
        let result = project_business_days(date(2025, 1, 10), 1, &HolidaySet::new());
        assert_eq!(result, Some(date(2025, 1, 13)));
    }

    #[test]
    fn test_friday_plus_five_is_next_friday() {
        let result = project_business_days(date(2025, 1, 10), 5, &HolidaySet::new());
        assert_eq!(result, Some(date(2025, 1, 17)));
    }

    #[test]
    fn test_holiday_after_start_is_skipped() {
        let holidays = HolidaySet::from_date_strings(["2025-01-13"]);
        assert_eq!(
            project_business_days(date(2025, 1, 10), 1, &holidays),
            Some(date(2025, 1, 14))
        );
        assert_eq!(
            project_business_days(date(2025, 1, 10), 5, &holidays),
            Some(date(2025, 1, 20))
        );
    }

    #[test]
    fn test_start_on_weekend() {
        // Saturday 2025-01-11: the next business day is Monday
        let result = project_business_days(date(2025, 1, 11), 1, &HolidaySet::new());
        assert_eq!(result, Some(date(2025, 1, 13)));
    }

    #[test]
    fn test_start_on_holiday_is_not_counted() {
        let holidays = HolidaySet::from_date_strings(["2025-05-01"]);
        // Thursday holiday; one business day later is Friday
        let result = project_business_days(date(2025, 5, 1), 1, &holidays);
        assert_eq!(result, Some(date(2025, 5, 2)));
    }

    #[test]
    fn test_consecutive_holidays() {
        // Holy Thursday and Good Friday 2025
        let holidays = HolidaySet::from_date_strings(["2025-04-17", "2025-04-18"]);
        let result = project_business_days(date(2025, 4, 16), 1, &holidays);
        assert_eq!(result, Some(date(2025, 4, 21)));
    }

    #[test]
    fn test_zero_days_returns_start() {
        let start = date(2025, 1, 11);
        assert_eq!(project_business_days(start, 0, &HolidaySet::new()), Some(start));
    }

    #[test]
    fn test_overflow_returns_none() {
        assert_eq!(project_business_days(NaiveDate::MAX, 1, &HolidaySet::new()), None);
    }

    #[test]
    fn test_str_accepts_day_first() {
        let result = project_business_days_str("10/01/2025", 1, &HolidaySet::new());
        assert_eq!(result, Some(date(2025, 1, 13)));
    }

    #[test]
    fn test_str_unparsable_is_none() {
        assert_eq!(project_business_days_str("ANULADA", 5, &HolidaySet::new()), None);
    }
}
