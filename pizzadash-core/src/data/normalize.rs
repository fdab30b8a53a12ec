//! Normalization of raw date and time fields.
//!
//! Source dates are day-first (`DD-MM-YYYY`). They are never parsed
//! month-first: `05-01-2023` is the 5th of January. Source times use `.`
//! between components (`11.38.36`).

use chrono::{NaiveDate, NaiveTime};

/// Accepted date layouts, tried in order. ISO is unambiguous and kept as a fallback.
const DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a day-first order date.
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parse an order time, replacing `.` separators with `:` first.
///
/// Returns `None` for anything unparseable, including empty input.
pub fn parse_order_time(raw: &str) -> Option<NaiveTime> {
    let normalized = raw.trim().replace('.', ":");
    if normalized.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
}
