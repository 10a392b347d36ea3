use chrono::{Local, TimeZone, Utc};
use epochal::convert::date::{now_stamp, parse};
use epochal::convert::{ConvertError, TimeReference};

#[test]
fn test_rfc3339_keeps_explicit_offset() {
    // An explicit offset wins over the reference flag in both modes.
    let expected = 1_763_384_853;
    assert_eq!(parse("2025-11-17T13:07:33Z", TimeReference::Local).unwrap(), expected);
    assert_eq!(parse("2025-11-17T13:07:33Z", TimeReference::Gmt).unwrap(), expected);
    assert_eq!(
        parse("2025-11-17T14:07:33+01:00", TimeReference::Gmt).unwrap(),
        expected
    );
}

#[test]
fn test_rfc2822_keeps_explicit_offset() {
    let expected = 1_763_384_853;
    assert_eq!(
        parse("Mon, 17 Nov 2025 13:07:33 +0000", TimeReference::Local).unwrap(),
        expected
    );
    assert_eq!(
        parse("Mon, 17 Nov 2025 13:07:33 GMT", TimeReference::Local).unwrap(),
        expected
    );
}

#[test]
fn test_naive_datetime_pinned_to_utc_in_gmt_mode() {
    assert_eq!(
        parse("2025-11-17 13:07:33", TimeReference::Gmt).unwrap(),
        1_763_384_853
    );
    assert_eq!(
        parse("2025-11-17T13:07:33", TimeReference::Gmt).unwrap(),
        1_763_384_853
    );
}

#[test]
fn test_naive_datetime_resolved_locally_in_local_mode() {
    let expected = Local
        .with_ymd_and_hms(2023, 3, 5, 12, 30, 45)
        .single()
        .expect("test datetime resolves in the local zone")
        .timestamp();
    assert_eq!(parse("2023-03-05 12:30:45", TimeReference::Local).unwrap(), expected);
}

#[test]
fn test_date_only_defaults_to_midnight() {
    assert_eq!(parse("2025-11-17", TimeReference::Gmt).unwrap(), 1_763_337_600);
    assert_eq!(parse("11/17/2025", TimeReference::Gmt).unwrap(), 1_763_337_600);
    assert_eq!(parse("17-11-2025", TimeReference::Gmt).unwrap(), 1_763_337_600);
    assert_eq!(parse("Nov 17, 2025", TimeReference::Gmt).unwrap(), 1_763_337_600);
}

#[test]
fn test_minute_precision_datetime() {
    assert_eq!(parse("2025-11-17T13:07", TimeReference::Gmt).unwrap(), 1_763_384_820);
}

#[test]
fn test_today_is_midnight_of_current_utc_day() {
    let expected = Utc
        .from_utc_datetime(&Utc::now().date_naive().and_hms_opt(0, 0, 0).unwrap())
        .timestamp();
    assert_eq!(parse("today", TimeReference::Gmt).unwrap(), expected);
    assert_eq!(parse("TODAY", TimeReference::Gmt).unwrap(), expected);
}

#[test]
fn test_yesterday_and_tomorrow_bracket_today() {
    let today = parse("today", TimeReference::Gmt).unwrap();
    assert_eq!(parse("yesterday", TimeReference::Gmt).unwrap(), today - 86_400);
    assert_eq!(parse("tomorrow", TimeReference::Gmt).unwrap(), today + 86_400);
}

#[test]
fn test_now_tracks_current_time() {
    let before = Utc::now().timestamp();
    let parsed = parse("now", TimeReference::Local).unwrap();
    let after = Utc::now().timestamp();
    assert!(parsed >= before && parsed <= after);
}

#[test]
fn test_unrecognized_input_fails() {
    assert!(matches!(
        parse("not a date at all", TimeReference::Local),
        Err(ConvertError::UnrecognizedDate(_))
    ));
    assert!(matches!(
        parse("2025-13-45", TimeReference::Local),
        Err(ConvertError::UnrecognizedDate(_))
    ));
}

#[test]
fn test_empty_input_fails() {
    assert_eq!(parse("", TimeReference::Local), Err(ConvertError::Empty));
    assert_eq!(parse("   ", TimeReference::Local), Err(ConvertError::Empty));
}

#[test]
fn test_now_stamp_layout() {
    let stamp = now_stamp();
    // Minute precision in a fixed ISO-like layout, e.g. 2025-11-17T13:07
    assert_eq!(stamp.len(), 16);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], "T");
    assert_eq!(&stamp[13..14], ":");
    // The stamp itself parses back.
    assert!(parse(&stamp, TimeReference::Gmt).is_ok());
}
