//! Start/end timestamps for a year, month, or day
//!
//! Month lengths are never tabulated: the end of a month is the day
//! before the first of the following month, so leap-year February falls
//! out of the calendar arithmetic. Out-of-range month and day fields
//! roll over into the neighboring period instead of erroring: day 31 of
//! a 30-day month lands on the 1st of the next month, day 0 on the last
//! day of the previous one.

use chrono::{Duration, Local, NaiveDate, TimeZone};

use super::{naive_to_timestamp, ConvertError, TimeReference};

/// Which calendar period is being bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodKind {
    Year,
    #[default]
    Month,
    Day,
}

impl PeriodKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::Year => "Year",
            PeriodKind::Month => "Month",
            PeriodKind::Day => "Day",
        }
    }

    /// Cycle forward through the kinds.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PeriodKind::Year => PeriodKind::Month,
            PeriodKind::Month => PeriodKind::Day,
            PeriodKind::Day => PeriodKind::Year,
        }
    }

    /// Cycle backward through the kinds.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            PeriodKind::Year => PeriodKind::Day,
            PeriodKind::Month => PeriodKind::Year,
            PeriodKind::Day => PeriodKind::Month,
        }
    }

    /// Whether the month field participates for this kind.
    #[must_use]
    pub fn uses_month(&self) -> bool {
        !matches!(self, PeriodKind::Year)
    }

    /// Whether the day field participates for this kind.
    #[must_use]
    pub fn uses_day(&self) -> bool {
        matches!(self, PeriodKind::Day)
    }
}

/// Start and end of a period, with local renderings for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBounds {
    pub start: i64,
    pub end: i64,
    /// `start` rendered in the viewer's local representation.
    pub start_display: String,
    /// `end` rendered in the viewer's local representation.
    pub end_display: String,
}

/// Compute the bounding timestamps of a period.
///
/// The calendar fields are wall-clock fields; in GMT mode the same
/// fields are reinterpreted as UTC fields rather than converted. This
/// intentionally differs from [`super::date::parse`]'s GMT handling:
/// here the question is "which timestamp corresponds to this calendar
/// date read as a UTC date". The display strings are always rendered in
/// the viewer's local representation, whatever `reference` was.
pub fn bounds(
    kind: PeriodKind,
    year: i32,
    month: u32,
    day: u32,
    reference: TimeReference,
    date_format: &str,
) -> Result<PeriodBounds, ConvertError> {
    let (first, last) = match kind {
        PeriodKind::Year => (
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ConvertError::OutOfRange)?,
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ConvertError::OutOfRange)?,
        ),
        PeriodKind::Month => {
            let first = first_of_month(year, i64::from(month))?;
            let last = first_of_month(year, i64::from(month) + 1)?
                .pred_opt()
                .ok_or(ConvertError::OutOfRange)?;
            (first, last)
        }
        PeriodKind::Day => {
            // First of the month plus an offset, so day overflow and
            // day 0 normalize instead of erroring.
            let date = first_of_month(year, i64::from(month))?
                .checked_add_signed(Duration::days(i64::from(day) - 1))
                .ok_or(ConvertError::OutOfRange)?;
            (date, date)
        }
    };

    let start_naive = first.and_hms_opt(0, 0, 0).ok_or(ConvertError::OutOfRange)?;
    let end_naive = last.and_hms_opt(23, 59, 59).ok_or(ConvertError::OutOfRange)?;
    let start = naive_to_timestamp(start_naive, reference)?;
    let end = naive_to_timestamp(end_naive, reference)?;

    Ok(PeriodBounds {
        start,
        end,
        start_display: render_local(start, date_format)?,
        end_display: render_local(end, date_format)?,
    })
}

/// First day of `month` in `year`, with months outside 1–12 rolling
/// into the neighboring years.
fn first_of_month(year: i32, month: i64) -> Result<NaiveDate, ConvertError> {
    let zero_based = month - 1;
    let year_offset = i32::try_from(zero_based.div_euclid(12)).map_err(|_| ConvertError::OutOfRange)?;
    let year = year.checked_add(year_offset).ok_or(ConvertError::OutOfRange)?;
    let month = u32::try_from(zero_based.rem_euclid(12) + 1).map_err(|_| ConvertError::OutOfRange)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ConvertError::OutOfRange)
}

fn render_local(timestamp: i64, date_format: &str) -> Result<String, ConvertError> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(date_format).to_string())
        .ok_or(ConvertError::OutOfRange)
}

/// Current local calendar fields, used for the period widget defaults.
#[must_use]
pub fn today_fields() -> (i32, u32, u32) {
    use chrono::Datelike;
    let today = Local::now().date_naive();
    (today.year(), today.month(), today.day())
}
