//! Second counts decomposed into days/hours/minutes/seconds

use super::ConvertError;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Exact decomposition of a second count, no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    #[must_use]
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: total % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }
}

/// Decompose a string holding a non-negative integer second count.
pub fn decompose(input: &str) -> Result<DurationParts, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::Empty);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        // A well-formed negative number is its own failure; garbage after
        // the sign is still just non-numeric.
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConvertError::NegativeDuration);
        }
        return Err(ConvertError::NotNumeric(trimmed.to_string()));
    }
    let total: u64 = trimmed
        .parse()
        .map_err(|_| ConvertError::NotNumeric(trimmed.to_string()))?;
    Ok(DurationParts::from_seconds(total))
}
