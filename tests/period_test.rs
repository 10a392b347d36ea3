use epochal::convert::period::{bounds, PeriodKind};
use epochal::convert::TimeReference;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn gmt_bounds(kind: PeriodKind, year: i32, month: u32, day: u32) -> (i64, i64) {
    let bounds = bounds(kind, year, month, day, TimeReference::Gmt, FORMAT).unwrap();
    (bounds.start, bounds.end)
}

#[test]
fn test_year_2025_gmt() {
    let (start, end) = gmt_bounds(PeriodKind::Year, 2025, 1, 1);
    assert_eq!(start, 1_735_689_600); // 2025-01-01T00:00:00Z
    assert_eq!(end, 1_767_225_599); // 2025-12-31T23:59:59Z
}

#[test]
fn test_year_ignores_month_and_day_fields() {
    let (start, end) = gmt_bounds(PeriodKind::Year, 2025, 7, 19);
    assert_eq!(start, 1_735_689_600);
    assert_eq!(end, 1_767_225_599);
}

#[test]
fn test_leap_february_ends_on_the_29th() {
    let (start, end) = gmt_bounds(PeriodKind::Month, 2024, 2, 1);
    assert_eq!(start, 1_706_745_600); // 2024-02-01T00:00:00Z
    assert_eq!(end, 1_709_251_199); // 2024-02-29T23:59:59Z
}

#[test]
fn test_non_leap_february_ends_on_the_28th() {
    let (start, end) = gmt_bounds(PeriodKind::Month, 2023, 2, 1);
    assert_eq!(start, 1_675_209_600); // 2023-02-01T00:00:00Z
    assert_eq!(end, 1_677_628_799); // 2023-02-28T23:59:59Z
}

#[test]
fn test_month_lengths_follow_the_calendar() {
    use chrono::{Datelike, TimeZone, Utc};
    for (year, month, expected_days) in [(2025, 1, 31), (2025, 4, 30), (2024, 2, 29), (2100, 2, 28), (2000, 2, 29)] {
        let (_, end) = gmt_bounds(PeriodKind::Month, year, month, 1);
        let end_day = Utc.timestamp_opt(end, 0).unwrap().day();
        assert_eq!(end_day, expected_days, "{year}-{month}");
    }
}

#[test]
fn test_march_month_gmt() {
    let (start, end) = gmt_bounds(PeriodKind::Month, 2025, 3, 1);
    assert_eq!(start, 1_740_787_200); // 2025-03-01T00:00:00Z
    assert_eq!(end, 1_743_465_599); // 2025-03-31T23:59:59Z
}

#[test]
fn test_day_gmt() {
    let (start, end) = gmt_bounds(PeriodKind::Day, 2025, 6, 15);
    assert_eq!(start, 1_749_945_600); // 2025-06-15T00:00:00Z
    assert_eq!(end, 1_750_031_999); // 2025-06-15T23:59:59Z
    assert_eq!(end - start, 86_399);
}

#[test]
fn test_day_overflow_rolls_into_next_month() {
    // April has 30 days; day 31 lands on May 1.
    let (start, _) = gmt_bounds(PeriodKind::Day, 2025, 4, 31);
    assert_eq!(start, 1_746_057_600); // 2025-05-01T00:00:00Z
}

#[test]
fn test_day_zero_rolls_into_previous_month() {
    let (start, end) = gmt_bounds(PeriodKind::Day, 2025, 5, 0);
    assert_eq!(start, 1_745_971_200); // 2025-04-30T00:00:00Z
    assert_eq!(end, 1_746_057_599); // 2025-04-30T23:59:59Z
}

#[test]
fn test_month_overflow_rolls_into_next_year() {
    let (start, _) = gmt_bounds(PeriodKind::Month, 2025, 13, 1);
    assert_eq!(start, 1_767_225_600); // 2026-01-01T00:00:00Z
}

#[test]
fn test_gmt_mode_reinterprets_fields_not_shifts_them() {
    // Whatever the local offset is, GMT mode reads the fields as UTC
    // fields, so the start is exactly midnight UTC.
    let (start, _) = gmt_bounds(PeriodKind::Day, 2025, 6, 15);
    assert_eq!(start % 86_400, 0);
}

#[test]
fn test_local_mode_resolves_wall_clock_fields() {
    use chrono::{Local, TimeZone};
    let result = bounds(PeriodKind::Day, 2025, 6, 15, TimeReference::Local, FORMAT).unwrap();
    let expected_start = Local
        .with_ymd_and_hms(2025, 6, 15, 0, 0, 0)
        .single()
        .expect("midnight exists in the local zone on this date")
        .timestamp();
    assert_eq!(result.start, expected_start);
}

#[test]
fn test_display_strings_are_rendered() {
    let result = bounds(PeriodKind::Year, 2025, 1, 1, TimeReference::Gmt, FORMAT).unwrap();
    assert!(!result.start_display.is_empty());
    assert!(!result.end_display.is_empty());
}

#[test]
fn test_far_future_year_is_in_range() {
    let (start, end) = gmt_bounds(PeriodKind::Year, 2030, 1, 1);
    assert!(start < end);
    assert_eq!(end + 1, 1_924_992_000); // 2031-01-01T00:00:00Z
}
