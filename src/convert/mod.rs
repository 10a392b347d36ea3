//! Conversion core shared by every widget
//!
//! Each submodule is a pure function of its inputs (plus the host clock
//! where the operation needs "now"): nothing in here touches UI state,
//! and every fallible path returns a [`ConvertError`] instead of
//! panicking.

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

pub mod date;
pub mod duration;
pub mod period;
pub mod timestamp;

pub use date::now_stamp;
pub use duration::DurationParts;
pub use period::{PeriodBounds, PeriodKind};
pub use timestamp::{ResolvedTimestamp, TimestampUnit};

/// Which offset calendar fields are interpreted/rendered with.
///
/// A naive set of calendar fields is meaningless without this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeReference {
    /// The host machine's configured offset.
    #[default]
    Local,
    /// Zero offset (UTC).
    Gmt,
}

impl TimeReference {
    /// Flip between the two references.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            TimeReference::Local => TimeReference::Gmt,
            TimeReference::Gmt => TimeReference::Local,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimeReference::Local => "Local",
            TimeReference::Gmt => "GMT",
        }
    }
}

/// Validation and range failures raised by the conversion functions.
///
/// None of these are fatal: the caller surfaces them as a transient
/// notification and keeps whatever result was displayed before.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not a valid number")]
    NotNumeric(String),
    #[error("timestamp has {0} digits, expected 1 to 19")]
    TooManyDigits(usize),
    #[error("negative durations are not supported")]
    NegativeDuration,
    #[error("'{0}' is not a recognized date")]
    UnrecognizedDate(String),
    #[error("date is out of range")]
    OutOfRange,
}

/// Resolve naive calendar fields against a reference frame.
///
/// In GMT mode the fields are read as UTC fields directly. In local mode
/// a wall-clock time skipped by a DST transition is out of range, and an
/// ambiguous one (clocks rolled back) resolves to the earlier instant so
/// that period starts stay below period ends.
pub(crate) fn naive_to_timestamp(naive: NaiveDateTime, reference: TimeReference) -> Result<i64, ConvertError> {
    match reference {
        TimeReference::Gmt => Ok(Utc.from_utc_datetime(&naive).timestamp()),
        TimeReference::Local => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp())
            .ok_or(ConvertError::OutOfRange),
    }
}
