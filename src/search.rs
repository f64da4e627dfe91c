use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use log::{debug, trace};

use crate::error::LunarError;
use crate::lunation::estimate_lunation;
use crate::phase::phase_time;
use crate::types::{MoonPhase, PhaseEvent, SearchConfig};

/// A reference point for the search, resolved to a UTC instant.
///
/// Dates without a time of day resolve to midnight UTC at the start of that
/// day, not local midnight. Naive date-times are taken as UTC.
pub trait ReferenceTime {
    fn to_utc_instant(&self) -> DateTime<Utc>;
}

impl ReferenceTime for NaiveDate {
    fn to_utc_instant(&self) -> DateTime<Utc> {
        self.and_time(NaiveTime::MIN).and_utc()
    }
}

impl ReferenceTime for NaiveDateTime {
    fn to_utc_instant(&self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl<Tz: TimeZone> ReferenceTime for DateTime<Tz> {
    fn to_utc_instant(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

pub fn next_phase_with<R: ReferenceTime + ?Sized>(
    after: &R,
    phase: MoonPhase,
    config: &SearchConfig,
) -> Result<PhaseEvent, LunarError> {
    let after = after.to_utc_instant();
    let estimate = estimate_lunation(after.date_naive());

    let mut start = estimate;
    for _ in 0..config.max_backtrack {
        if phase_time(start - 1, phase)? > after {
            start -= 1;
        } else {
            break;
        }
    }
    if start != estimate {
        debug!(
            "{}: estimate k={} overshot {}, starting at k={}",
            phase, estimate, after, start
        );
    }

    for lunation in (start..).take(config.candidates as usize) {
        let instant = phase_time(lunation, phase)?;
        trace!("{}: k={} -> {}", phase, lunation, instant);
        if instant > after {
            debug!("next {} after {}: {} (k={})", phase, after, instant, lunation);
            return Ok(PhaseEvent {
                phase,
                lunation,
                instant,
            });
        }
    }

    Err(LunarError::SearchExhausted {
        phase,
        after,
        candidates: config.candidates,
    })
}

pub fn next_phase<R: ReferenceTime + ?Sized>(
    after: &R,
    phase: MoonPhase,
) -> Result<PhaseEvent, LunarError> {
    next_phase_with(after, phase, &SearchConfig::default())
}

pub fn next_new_moon<R: ReferenceTime + ?Sized>(after: &R) -> Result<DateTime<Utc>, LunarError> {
    next_phase(after, MoonPhase::New).map(|event| event.instant)
}

pub fn next_full_moon<R: ReferenceTime + ?Sized>(after: &R) -> Result<DateTime<Utc>, LunarError> {
    next_phase(after, MoonPhase::Full).map(|event| event.instant)
}

pub fn next_first_quarter_moon<R: ReferenceTime + ?Sized>(
    after: &R,
) -> Result<DateTime<Utc>, LunarError> {
    next_phase(after, MoonPhase::FirstQuarter).map(|event| event.instant)
}

pub fn next_last_quarter_moon<R: ReferenceTime + ?Sized>(
    after: &R,
) -> Result<DateTime<Utc>, LunarError> {
    next_phase(after, MoonPhase::LastQuarter).map(|event| event.instant)
}

/// The next event of each phase kind, earliest first.
pub fn upcoming_phases<R: ReferenceTime + ?Sized>(
    after: &R,
) -> Result<[PhaseEvent; 4], LunarError> {
    let mut events = [
        next_phase(after, MoonPhase::New)?,
        next_phase(after, MoonPhase::FirstQuarter)?,
        next_phase(after, MoonPhase::Full)?,
        next_phase(after, MoonPhase::LastQuarter)?,
    ];
    events.sort_by_key(|event| event.instant);
    Ok(events)
}
