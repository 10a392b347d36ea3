use epochal::convert::duration::{decompose, DurationParts};
use epochal::convert::ConvertError;

fn parts(days: u64, hours: u64, minutes: u64, seconds: u64) -> DurationParts {
    DurationParts {
        days,
        hours,
        minutes,
        seconds,
    }
}

#[test]
fn test_one_day() {
    assert_eq!(decompose("86400").unwrap(), parts(1, 0, 0, 0));
}

#[test]
fn test_one_of_each() {
    assert_eq!(decompose("90061").unwrap(), parts(1, 1, 1, 1));
}

#[test]
fn test_under_a_minute() {
    assert_eq!(decompose("59").unwrap(), parts(0, 0, 0, 59));
}

#[test]
fn test_zero() {
    assert_eq!(decompose("0").unwrap(), parts(0, 0, 0, 0));
}

#[test]
fn test_boundaries() {
    assert_eq!(decompose("60").unwrap(), parts(0, 0, 1, 0));
    assert_eq!(decompose("3600").unwrap(), parts(0, 1, 0, 0));
    assert_eq!(decompose("86399").unwrap(), parts(0, 23, 59, 59));
}

#[test]
fn test_large_value() {
    // 1000 days exactly
    assert_eq!(decompose("86400000").unwrap(), parts(1000, 0, 0, 0));
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(decompose("  90061 ").unwrap(), parts(1, 1, 1, 1));
}

#[test]
fn test_negative_fails() {
    assert_eq!(decompose("-1"), Err(ConvertError::NegativeDuration));
    assert_eq!(decompose("-86400"), Err(ConvertError::NegativeDuration));
}

#[test]
fn test_non_numeric_fails() {
    assert!(matches!(decompose("abc"), Err(ConvertError::NotNumeric(_))));
    assert!(matches!(decompose("12.5"), Err(ConvertError::NotNumeric(_))));
    assert!(matches!(decompose("-abc"), Err(ConvertError::NotNumeric(_))));
}

#[test]
fn test_empty_fails() {
    assert_eq!(decompose(""), Err(ConvertError::Empty));
    assert_eq!(decompose("   "), Err(ConvertError::Empty));
}
