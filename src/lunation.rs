use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

pub const LUNATIONS_PER_YEAR: f64 = 12.3685;
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
pub const EPOCH_YEAR: i32 = 2000;
pub const NEW_MOON_EPOCH_UNIX: i64 = 947_182_440;

/// The new moon of 2000-01-06 18:14 UTC, lunation 0 of the series.
pub fn new_moon_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::seconds(NEW_MOON_EPOCH_UNIX)
}

/// Approximate lunation index for `date`, at or slightly before the true one.
///
/// Only the calendar date is used; the time of day does not refine the
/// estimate. The result can be off by about one lunation.
pub fn estimate_lunation(date: NaiveDate) -> i64 {
    let year_frac = date.ordinal0() as f64 / DAYS_PER_JULIAN_YEAR;
    let years = (date.year() - EPOCH_YEAR) as f64 + year_frac;
    (years * LUNATIONS_PER_YEAR).floor() as i64
}
