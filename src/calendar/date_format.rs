//! The single date-parsing boundary.
//!
//! Stored orders carry dates as `DD/MM/YYYY` text while the holiday table may
//! use `YYYY-MM-DD`. Both forms are converted to [`NaiveDate`] here and nowhere
//! else; everything past this module works on typed dates.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Day-first format used for stored and displayed dates.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// ISO format used by the holiday table.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Years a four-digit `YYYY` field can hold.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parses a date in either `DD/MM/YYYY` or `YYYY-MM-DD` form.
///
/// Surrounding whitespace is ignored. A `/` anywhere in the text selects the
/// day-first format. Years outside `1..=9999` are rejected.
///
/// # Example
///
/// ```
/// use commission_deadlines::calendar::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// assert_eq!(parse_date("10/01/2025").unwrap(), expected);
/// assert_eq!(parse_date("2025-01-10").unwrap(), expected);
/// assert!(parse_date("January 10").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();
    let format = if trimmed.contains('/') {
        DISPLAY_DATE_FORMAT
    } else {
        ISO_DATE_FORMAT
    };

    NaiveDate::parse_from_str(trimmed, format)
        .ok()
        .filter(|date| YEAR_RANGE.contains(&date.year()))
        .ok_or_else(|| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Renders a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Renders an optional date, using an empty string for an absent one.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
