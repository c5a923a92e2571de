//! Holiday lookup.
//!
//! Turns the holiday table (a list of date strings in either supported format)
//! into a [`HolidaySet`] used by the business-day functions.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::date_format::parse_date;

/// One row of the holiday table as stored.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::HolidayEntry;
///
/// let entry = HolidayEntry {
///     date: "2025-07-20".to_string(),
///     description: Some("Independence Day".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date as text, `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub date: String,
    /// Optional human-readable name of the holiday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HolidayEntry {
    /// Creates an entry with no description.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: None,
        }
    }
}

/// A set of holiday dates, looked up by exact calendar date.
///
/// Built once per calculation and not modified while it is used.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::from_date_strings(["2025-01-06", "24/03/2025", "garbage"]);
/// assert_eq!(holidays.len(), 2);
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty set (weekend-only exclusion).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses date strings, skipping any entry that is not a valid date.
    pub fn from_date_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = BTreeSet::new();
        for value in values {
            let value = value.as_ref();
            match parse_date(value) {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(err) => {
                    warn!(value = %value, error = %err, "Skipping malformed holiday entry");
                }
            }
        }
        Self { dates }
    }

    /// Builds the set from holiday-table rows.
    pub fn from_entries(entries: &[HolidayEntry]) -> Self {
        Self::from_date_strings(entries.iter().map(|entry| entry.date.as_str()))
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of holidays in `[start, end]` that fall Monday through Friday.
    ///
    /// Only the holidays inside the range are visited, so the cost does not
    /// depend on how far apart the two dates are.
    pub fn weekday_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if end < start {
            return 0;
        }
        let count = self
            .dates
            .range(start..=end)
            .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
