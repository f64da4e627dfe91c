use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Wall-clock value of `instant` in `tz`, with the zone dropped.
pub fn to_naive_in<Tz: TimeZone, Z: TimeZone>(instant: &DateTime<Tz>, tz: &Z) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Wall-clock value of `instant` in the host's local zone.
///
/// The zone comes from the platform (`TZ`, then the system database); chrono
/// falls back to UTC when neither is readable.
pub fn to_local_naive<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDateTime {
    to_naive_in(instant, &Local)
}
