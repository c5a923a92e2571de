//! Business-day counting.
//!
//! A business day is Monday through Friday and not in the [`HolidaySet`].

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use super::date_format::parse_date;
use super::holidays::HolidaySet;

/// Returns true if `date` is a weekday that is not a holiday.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::{is_business_day, HolidaySet};
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::from_date_strings(["2025-01-06"]);
///
/// // Friday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), &holidays));
/// // Saturday
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(), &holidays));
/// // Monday, but a holiday
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), &holidays));
/// ```
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => false,
        _ => !holidays.contains(date),
    }
}

/// Counts business days in the inclusive range `[start, end]`.
///
/// Returns 0 when `end` is before `start`.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::{count_business_days, HolidaySet};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// assert_eq!(count_business_days(start, end, &HolidaySet::new()), 8);
/// assert_eq!(count_business_days(end, start, &HolidaySet::new()), 0);
/// ```
pub fn count_business_days(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    if end < start {
        return 0;
    }
    let total_days = (end - start).num_days() + 1;
    let first_weekday = i64::from(start.weekday().num_days_from_monday());
    // Whole weeks hold five weekdays each; the leftover days start on `first_weekday`.
    let leftover_weekdays = (0..total_days % 7)
        .filter(|offset| (first_weekday + offset) % 7 < 5)
        .count() as i64;
    let weekdays = (total_days / 7) * 5 + leftover_weekdays;
    let business_days = weekdays - i64::from(holidays.weekday_holidays_between(start, end));
    u32::try_from(business_days).unwrap_or(u32::MAX)
}

/// Counts business days between two textual dates.
///
/// Either date may be `DD/MM/YYYY` or `YYYY-MM-DD`. An unparsable date is
/// logged and counts as 0 business days rather than failing.
pub fn count_business_days_str(start: &str, end: &str, holidays: &HolidaySet) -> u32 {
    match (parse_date(start), parse_date(end)) {
        (Ok(start), Ok(end)) => count_business_days(start, end, holidays),
        (Err(err), _) | (_, Err(err)) => {
            warn!(start = %start, end = %end, error = %err, "Cannot count business days");
            0
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
    fn test_weekdays_are_business_days() {
        let holidays = HolidaySet::new();
        // 2025-01-06 is a Monday
        for offset in 0..5 {
            let day = date(2025, 1, 6 + offset);
            assert!(is_business_day(day, &holidays), "{} should count", day);
        }
    }

    #[test]
    fn test_weekend_is_not_business_day() {
        let holidays = HolidaySet::new();
        assert!(!is_business_day(date(2025, 1, 11), &holidays));
        assert!(!is_business_day(date(2025, 1, 12), &holidays));
    }

    #[test]
    fn test_single_weekday_counts_once() {
        let holidays = HolidaySet::new();
        let friday = date(2025, 1, 10);
        assert_eq!(count_business_days(friday, friday, &holidays), 1);
    }

    #[test]
    fn test_single_weekend_day_counts_zero() {
        let holidays = HolidaySet::new();
        let sunday = date(2025, 1, 12);
        assert_eq!(count_business_days(sunday, sunday, &holidays), 0);
    }

    #[test]
    fn test_full_week_counts_five() {
        let holidays = HolidaySet::new();
        assert_eq!(
            count_business_days(date(2025, 1, 13), date(2025, 1, 19), &holidays),
            5
        );
    }

    #[test]
    fn test_holidays_are_excluded() {
        // Epiphany (moved) on Monday 2025-01-06
        let holidays = HolidaySet::from_date_strings(["2025-01-06"]);
        assert_eq!(
            count_business_days(date(2025, 1, 6), date(2025, 1, 10), &holidays),
            4
        );
    }

    #[test]
    fn test_holiday_on_weekend_has_no_extra_effect() {
        // 2025-07-20 falls on a Sunday
        let holidays = HolidaySet::from_date_strings(["2025-07-20"]);
        assert_eq!(
            count_business_days(date(2025, 7, 14), date(2025, 7, 20), &holidays),
            5
        );
    }

    #[test]
    fn test_inverted_range_is_zero() {
        let holidays = HolidaySet::new();
        assert_eq!(
            count_business_days(date(2025, 1, 10), date(2025, 1, 1), &holidays),
            0
        );
    }

    #[test]
    fn test_count_across_year_boundary() {
        let holidays = HolidaySet::from_date_strings(["2025-12-25", "2026-01-01"]);
        // Mon 2025-12-22 .. Fri 2026-01-02: 10 weekdays minus 2 holidays
        assert_eq!(
            count_business_days(date(2025, 12, 22), date(2026, 1, 2), &holidays),
            8
        );
    }

    #[test]
    fn test_count_matches_day_by_day_walk() {
        // Weekday and weekend holidays over a span that crosses several weeks
        let holidays = HolidaySet::from_date_strings([
            "2025-01-01", "2025-01-06", "2025-01-11", "2025-02-02", "2025-03-24",
        ]);
        let origin = date(2024, 12, 28);
        for start_offset in 0..10 {
            let start = origin + chrono::Duration::days(start_offset);
            for length in 0..100 {
                let end = start + chrono::Duration::days(length);
                let walked = start
                    .iter_days()
                    .take_while(|day| *day <= end)
                    .filter(|day| is_business_day(*day, &holidays))
                    .count() as u32;
                assert_eq!(
                    count_business_days(start, end, &holidays),
                    walked,
                    "{} .. {}",
                    start,
                    end
                );
            }
        }
    }

    #[test]
    fn test_count_over_centuries_is_exact() {
        // The Gregorian calendar repeats every 400 years (146097 days,
        // 20871 weeks), so each 400-year span holds 104355 weekdays.
        let holidays = HolidaySet::new();
        let start = date(-200_000, 1, 1);
        let end = date(-199_601, 1, 1) - chrono::Duration::days(1);
        assert_eq!(count_business_days(start, end, &holidays), 104_355);
        assert_eq!(
            count_business_days(date(1601, 1, 1), date(2000, 12, 31), &holidays),
            104_355
        );
    }

    #[test]
    fn test_count_across_full_chrono_range_saturates_cleanly() {
        let holidays = HolidaySet::from_date_strings(["2025-01-06"]);
        let count = count_business_days(NaiveDate::MIN, NaiveDate::MAX, &holidays);
        assert!(count > 0);
    }

    #[test]
    fn test_count_str_mixed_formats() {
        let holidays = HolidaySet::new();
        assert_eq!(count_business_days_str("01/01/2025", "2025-01-10", &holidays), 8);
    }

    #[test]
    fn test_count_str_unparsable_is_zero() {
        let holidays = HolidaySet::new();
        assert_eq!(count_business_days_str("ANULADA", "10/01/2025", &holidays), 0);
        assert_eq!(count_business_days_str("01/01/2025", "", &holidays), 0);
    }
}
