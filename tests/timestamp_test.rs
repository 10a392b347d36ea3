use epochal::convert::timestamp::{resolve, TimestampUnit};
use epochal::convert::{ConvertError, TimeReference};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[test]
fn test_unit_inference_seconds() {
    for input in ["5", "1700000000"] {
        let resolved = resolve(input, TimeReference::Gmt, FORMAT).unwrap();
        assert_eq!(resolved.unit, TimestampUnit::Seconds);
    }
}

#[test]
fn test_unit_inference_milliseconds() {
    for input in ["17000000000", "1700000000000"] {
        let resolved = resolve(input, TimeReference::Gmt, FORMAT).unwrap();
        assert_eq!(resolved.unit, TimestampUnit::Milliseconds);
    }
}

#[test]
fn test_unit_inference_microseconds() {
    for input in ["17000000000000", "1700000000000000"] {
        let resolved = resolve(input, TimeReference::Gmt, FORMAT).unwrap();
        assert_eq!(resolved.unit, TimestampUnit::Microseconds);
    }
}

#[test]
fn test_unit_inference_nanoseconds() {
    for input in ["17000000000000000", "1700000000000000000"] {
        let resolved = resolve(input, TimeReference::Gmt, FORMAT).unwrap();
        assert_eq!(resolved.unit, TimestampUnit::Nanoseconds);
    }
}

#[test]
fn test_normalized_seconds_echo() {
    // Each unit class normalizes back to the same second count.
    for input in [
        "1700000000",
        "1700000000000",
        "1700000000000000",
        "1700000000000000000",
    ] {
        let resolved = resolve(input, TimeReference::Gmt, FORMAT).unwrap();
        assert_eq!(resolved.seconds, 1_700_000_000, "input {input}");
    }
}

#[test]
fn test_normalization_floors_sub_second_digits() {
    let resolved = resolve("1700000000999", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.seconds, 1_700_000_000);

    let resolved = resolve("1700000000999999", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.seconds, 1_700_000_000);
}

#[test]
fn test_gmt_rendering() {
    let resolved = resolve("1700000000", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.formatted, "2023-11-14 22:13:20");
}

#[test]
fn test_sign_excluded_from_digit_count() {
    // Ten digits after the sign is still the seconds class.
    let resolved = resolve("-1700000000", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.unit, TimestampUnit::Seconds);
    assert_eq!(resolved.seconds, -1_700_000_000);

    let resolved = resolve("+1700000000", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.unit, TimestampUnit::Seconds);
    assert_eq!(resolved.seconds, 1_700_000_000);
}

#[test]
fn test_whitespace_trimmed_before_counting() {
    let resolved = resolve("  1700000000  ", TimeReference::Gmt, FORMAT).unwrap();
    assert_eq!(resolved.unit, TimestampUnit::Seconds);
}

#[test]
fn test_too_many_digits_rejected() {
    assert_eq!(
        resolve("12345678901234567890", TimeReference::Gmt, FORMAT),
        Err(ConvertError::TooManyDigits(20))
    );
}

#[test]
fn test_non_numeric_rejected() {
    assert!(matches!(
        resolve("not a number", TimeReference::Gmt, FORMAT),
        Err(ConvertError::NotNumeric(_))
    ));
    assert!(matches!(
        resolve("17000x0000", TimeReference::Gmt, FORMAT),
        Err(ConvertError::NotNumeric(_))
    ));
    // A bare sign has no digits to classify.
    assert!(matches!(
        resolve("-", TimeReference::Gmt, FORMAT),
        Err(ConvertError::NotNumeric(_))
    ));
}

#[test]
fn test_empty_rejected() {
    assert_eq!(resolve("", TimeReference::Gmt, FORMAT), Err(ConvertError::Empty));
    assert_eq!(resolve("   ", TimeReference::Gmt, FORMAT), Err(ConvertError::Empty));
}

#[test]
fn test_local_rendering_round_trips() {
    // Rendering in local and parsing the rendering back lands on the
    // same instant.
    let resolved = resolve("1700000000", TimeReference::Local, FORMAT).unwrap();
    let back = epochal::convert::date::parse(&resolved.formatted, TimeReference::Local).unwrap();
    assert_eq!(back, 1_700_000_000);
}

#[test]
fn test_gmt_round_trips() {
    let resolved = resolve("1700000000", TimeReference::Gmt, FORMAT).unwrap();
    let back = epochal::convert::date::parse(&resolved.formatted, TimeReference::Gmt).unwrap();
    assert_eq!(back, 1_700_000_000);
}
