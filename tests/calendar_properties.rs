//! Property tests for the business-day calendar and the calculator.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use commission_deadlines::calculation::{calculate_derived_fields, classify_alert};
use commission_deadlines::calendar::{
    HolidaySet, count_business_days, is_business_day, project_business_days,
};
use commission_deadlines::config::DeadlineRules;
use commission_deadlines::models::{Alert, Order, OrderDate};
use rust_decimal::Decimal;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: u32) -> NaiveDate {
    base() + Duration::days(i64::from(offset))
}

fn holiday_set(offsets: &[u32]) -> HolidaySet {
    offsets.iter().map(|offset| day(*offset)).collect()
}

proptest! {
    /// Projection always lands strictly after the start, on a business day.
    #[test]
    fn projection_moves_forward_to_business_day(
        start in 0u32..1000,
        n in 1u32..20,
        holidays in prop::collection::vec(0u32..1100, 0..40),
    ) {
        let set = holiday_set(&holidays);
        let from = day(start);
        let projected = project_business_days(from, n, &set).unwrap();
        prop_assert!(projected > from);
        prop_assert!(is_business_day(projected, &set));
    }

    /// Exactly `n` business days lie after the start, up to the projected date.
    #[test]
    fn projection_and_count_agree(
        start in 0u32..1000,
        n in 1u32..20,
        holidays in prop::collection::vec(0u32..1100, 0..40),
    ) {
        let set = holiday_set(&holidays);
        let from = day(start);
        let projected = project_business_days(from, n, &set).unwrap();
        prop_assert_eq!(count_business_days(from + Duration::days(1), projected, &set), n);
    }

    /// A single day counts once on weekdays and never on weekends.
    #[test]
    fn single_day_count(offset in 0u32..3000) {
        let date = day(offset);
        let expected = match date.weekday() {
            Weekday::Sat | Weekday::Sun => 0,
            _ => 1,
        };
        prop_assert_eq!(count_business_days(date, date, &HolidaySet::new()), expected);
    }

    /// Extending the range never lowers the count.
    #[test]
    fn count_is_monotonic_in_end(
        start in 0u32..500,
        length in 0u32..200,
        extra in 0u32..50,
        holidays in prop::collection::vec(0u32..800, 0..30),
    ) {
        let set = holiday_set(&holidays);
        let shorter = count_business_days(day(start), day(start + length), &set);
        let longer = count_business_days(day(start), day(start + length + extra), &set);
        prop_assert!(longer >= shorter);
    }

    /// Inverted ranges count zero.
    #[test]
    fn inverted_range_counts_zero(start in 1u32..1000, back in 1u32..100) {
        let end_offset = start.saturating_sub(back);
        prop_assume!(end_offset < start);
        prop_assert_eq!(count_business_days(day(start), day(end_offset), &HolidaySet::new()), 0);
    }

    /// Remaining days and alert always agree in sign.
    #[test]
    fn alert_matches_remaining_days(remaining in -100i64..100) {
        let alert = classify_alert(Some(remaining), 2);
        match remaining {
            r if r < 0 => prop_assert_eq!(alert, Alert::Overdue),
            0..=2 => prop_assert_eq!(alert, Alert::DueSoon),
            _ => prop_assert_eq!(alert, Alert::SufficientTime),
        }
    }

    /// Recomputing with the same inputs gives identical fields.
    #[test]
    fn calculation_is_idempotent(
        start in 0u32..700,
        length in 0u32..20,
        today in 0u32..800,
        holidays in prop::collection::vec(0u32..800, 0..30),
    ) {
        let set = holiday_set(&holidays);
        let order = Order {
            order_number: 1,
            start_date: OrderDate::Active(day(start)),
            end_date: OrderDate::Active(day(start + length)),
            legalization_date: None,
            daily_allowance: Decimal::ZERO,
            order_allowance_total: Decimal::ZERO,
            order_expense_total: Decimal::ZERO,
            legalized_allowance_total: None,
            legalized_expense_total: None,
        };
        let rules = DeadlineRules::default();
        let first = calculate_derived_fields(&order, &set, day(today), &rules);
        let second = calculate_derived_fields(&order, &set, day(today), &rules);
        prop_assert_eq!(first, second);
    }
}
