use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::America::Chicago;
use chrono_tz::Asia::Kolkata;

use lunar_phases::local::*;
use lunar_phases::search::next_full_moon;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

// ── Fixed zones ──

#[test]
fn test_utc_projection_keeps_calendar_fields() {
    let t = next_full_moon(&utc(2024, 1, 1, 0, 0, 0)).unwrap();
    let naive = to_naive_in(&t, &Utc);
    assert_eq!(naive, t.naive_utc());
    assert_eq!(
        (naive.year(), naive.month(), naive.day(), naive.hour(), naive.minute()),
        (t.year(), t.month(), t.day(), t.hour(), t.minute())
    );
    assert_eq!(naive.nanosecond(), t.nanosecond());
}

#[test]
fn test_fixed_offset_projection() {
    let t = utc(2024, 1, 11, 23, 30, 0);
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let naive = to_naive_in(&t, &plus_two);
    let expected = NaiveDate::from_ymd_opt(2024, 1, 12)
        .unwrap()
        .and_hms_opt(1, 30, 0)
        .unwrap();
    assert_eq!(naive, expected);
}

// ── Named zones ──

#[test]
fn test_named_zone_projection() {
    let t = utc(2024, 1, 25, 17, 54, 0);
    assert_eq!(to_naive_in(&t, &Chicago).hour(), 11);
    let kolkata = to_naive_in(&t, &Kolkata);
    assert_eq!((kolkata.day(), kolkata.hour(), kolkata.minute()), (25, 23, 24));
}

#[test]
fn test_named_zone_daylight_saving() {
    let summer = utc(2024, 7, 21, 10, 17, 0);
    assert_eq!(to_naive_in(&summer, &Chicago).hour(), 5);
    let winter = utc(2024, 12, 15, 9, 1, 0);
    assert_eq!(to_naive_in(&winter, &Chicago).hour(), 3);
}

#[test]
fn test_projection_ignores_input_zone() {
    let t = utc(2024, 3, 10, 12, 0, 0);
    let in_chicago = t.with_timezone(&Chicago);
    assert_eq!(to_naive_in(&in_chicago, &Utc), t.naive_utc());
}

// ── Host zone ──

#[test]
fn test_local_projection_matches_local_offset() {
    let t = utc(2024, 1, 18, 3, 53, 0);
    let naive = to_local_naive(&t);
    let offset = naive - t.naive_utc();
    assert_eq!(offset.num_seconds() % 60, 0);
    assert!(offset.num_hours().abs() <= 14);
}
