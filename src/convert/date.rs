//! Free-form date string to Unix timestamp
//!
//! Parsing tries a chain of strategies: exact RFC flavors first, then
//! progressively looser layouts, then the natural words. Inputs that
//! carry their own offset keep it; naive inputs are resolved against
//! the requested reference, so GMT mode pins an offset-less date to UTC
//! instead of the local zone.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{naive_to_timestamp, ConvertError, TimeReference};

/// Layouts with a time component, tried in order after the RFC parsers.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y", "%b %d, %Y", "%d %b %Y"];

/// Parse a human-entered date string into whole seconds since the epoch.
pub fn parse(input: &str, reference: TimeReference) -> Result<i64, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::Empty);
    }

    if let Some(ts) = parse_natural(trimmed, reference)? {
        return Ok(ts);
    }

    // Explicit offsets win over the reference flag.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.timestamp());
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return naive_to_timestamp(naive, reference);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return naive_to_timestamp(date.and_time(NaiveTime::MIN), reference);
        }
    }

    Err(ConvertError::UnrecognizedDate(trimmed.to_string()))
}

/// Handle `now` / `today` / `yesterday` / `tomorrow`.
///
/// The day words resolve to midnight of the named day in the requested
/// reference; `now` is the current instant regardless of reference.
fn parse_natural(input: &str, reference: TimeReference) -> Result<Option<i64>, ConvertError> {
    let word = input.to_ascii_lowercase();
    if word == "now" {
        return Ok(Some(Utc::now().timestamp()));
    }

    let today = match reference {
        TimeReference::Local => chrono::Local::now().date_naive(),
        TimeReference::Gmt => Utc::now().date_naive(),
    };
    let date = match word.as_str() {
        "today" => today,
        "yesterday" => today.checked_sub_days(Days::new(1)).ok_or(ConvertError::OutOfRange)?,
        "tomorrow" => today.checked_add_days(Days::new(1)).ok_or(ConvertError::OutOfRange)?,
        _ => return Ok(None),
    };
    naive_to_timestamp(date.and_time(NaiveTime::MIN), reference).map(Some)
}

/// Current moment at minute precision, for stamping the input field.
#[must_use]
pub fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M").to_string()
}
