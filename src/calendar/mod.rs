//! Holiday-aware business-day calendar.
//!
//! This module holds the date-parsing boundary, the holiday lookup, business
//! day counting, deadline projection and the injectable clock. Nothing here
//! raises on bad input: unparsable text degrades to 0 or `None` and is logged.

mod business_days;
mod clock;
mod date_format;
mod holidays;
mod projection;

pub use business_days::{count_business_days, count_business_days_str, is_business_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date_format::{
    DISPLAY_DATE_FORMAT, ISO_DATE_FORMAT, format_date, format_optional_date, parse_date,
};
pub use holidays::{HolidayEntry, HolidaySet};
pub use projection::{project_business_days, project_business_days_str};
