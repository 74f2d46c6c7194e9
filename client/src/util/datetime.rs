//! Timestamp parsing for form input and local-time display for the table.
//!
//! Parsing is lenient in the way browser date constructors are: RFC 3339,
//! `datetime-local` values (with or without seconds) read as local time, and
//! bare dates read as UTC midnight. Anything else is "not a date" (`None`).

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Cell text for a timestamp that does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display pattern matching the browser's default `en-US` locale string.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parse a user- or API-supplied timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(local_to_utc(naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

// Nonexistent local times (DST gaps) fall back to reading the wall clock as UTC.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map_or_else(|| naive.and_utc(), |dt| dt.with_timezone(&Utc))
}

/// True only when both values parse and `departure` is strictly earlier.
/// A "not a date" on either side compares false.
pub fn departs_before(departure: &str, arrival: &str) -> bool {
    match (parse_timestamp(departure), parse_timestamp(arrival)) {
        (Some(dep), Some(arr)) => dep < arr,
        _ => false,
    }
}

/// Render a timestamp in the viewer's local time zone.
pub fn format_local(ts: &DateTime<Utc>) -> String {
    format_in_zone(&ts.with_timezone(&Local))
}

/// Render an API timestamp string for a table cell.
pub fn format_timestamp_cell(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| INVALID_DATE.to_owned(), |ts| format_local(&ts))
}

fn format_in_zone<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format(DISPLAY_FORMAT).to_string()
}
