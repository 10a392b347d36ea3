//! Timestamp to calendar date resolution
//!
//! The unit of a raw timestamp is inferred from how many digits the user
//! typed, not from its numeric magnitude:
//!
//! | digits  | unit         |
//! |---------|--------------|
//! | 1–10    | seconds      |
//! | 11–13   | milliseconds |
//! | 14–16   | microseconds |
//! | 17–19   | nanoseconds  |
//!
//! A sign and surrounding whitespace are stripped before counting so they
//! can never push a value into the wrong class. More than 19 digits is
//! rejected rather than clamped to nanoseconds.

use chrono::{Local, TimeZone, Utc};

use super::{ConvertError, TimeReference};

/// Unit class a raw timestamp was typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimestampUnit {
    fn from_digit_count(count: usize) -> Result<Self, ConvertError> {
        match count {
            1..=10 => Ok(TimestampUnit::Seconds),
            11..=13 => Ok(TimestampUnit::Milliseconds),
            14..=16 => Ok(TimestampUnit::Microseconds),
            17..=19 => Ok(TimestampUnit::Nanoseconds),
            other => Err(ConvertError::TooManyDigits(other)),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimestampUnit::Seconds => "seconds",
            TimestampUnit::Milliseconds => "milliseconds",
            TimestampUnit::Microseconds => "microseconds",
            TimestampUnit::Nanoseconds => "nanoseconds",
        }
    }
}

/// Result of resolving a raw timestamp string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    /// Unit inferred from the digit count.
    pub unit: TimestampUnit,
    /// Input normalized to whole seconds since the epoch.
    pub seconds: i64,
    /// Calendar rendering in the requested reference.
    pub formatted: String,
}

/// Resolve a digit string into a calendar date.
///
/// `date_format` is a strftime pattern used for the rendering; the
/// normalized-seconds value is echoed back alongside it.
pub fn resolve(input: &str, reference: TimeReference, date_format: &str) -> Result<ResolvedTimestamp, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::NotNumeric(trimmed.to_string()));
    }

    let unit = TimestampUnit::from_digit_count(digits.len())?;

    // 19 digits can exceed i64, so the raw value is held in i128 until it
    // has been normalized down to milliseconds.
    let magnitude: i128 = digits.parse().map_err(|_| ConvertError::NotNumeric(trimmed.to_string()))?;
    let value = if negative { -magnitude } else { magnitude };
    let millis_wide = match unit {
        TimestampUnit::Seconds => value * 1_000,
        TimestampUnit::Milliseconds => value,
        TimestampUnit::Microseconds => value.div_euclid(1_000),
        TimestampUnit::Nanoseconds => value.div_euclid(1_000_000),
    };
    let millis = i64::try_from(millis_wide).map_err(|_| ConvertError::OutOfRange)?;
    let seconds = millis.div_euclid(1_000);

    let formatted = match reference {
        TimeReference::Local => Local
            .timestamp_millis_opt(millis)
            .single()
            .ok_or(ConvertError::OutOfRange)?
            .format(date_format)
            .to_string(),
        TimeReference::Gmt => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or(ConvertError::OutOfRange)?
            .format(date_format)
            .to_string(),
    };

    Ok(ResolvedTimestamp { unit, seconds, formatted })
}
