use chrono::{DateTime, Utc};
use log::trace;

use crate::angles::{deg_to_rad, rad_to_deg};
use crate::error::LunarError;
use crate::types::{LunarArguments, MoonPhase};

pub const MEAN_NEW_MOON_JDE: f64 = 2451550.09766;
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;
pub const LUNATIONS_PER_CENTURY: f64 = 1236.85;
pub const JDE_UNIX_EPOCH: f64 = 2440587.5;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// One periodic term: `coefficient * E^e_power * sin(m*M + m_prime*M' + f*F)`.
#[derive(Debug, Clone, Copy)]
struct Term {
    coefficient: f64,
    e_power: i32,
    m: f64,
    m_prime: f64,
    f: f64,
}

const fn term(coefficient: f64, e_power: i32, m: f64, m_prime: f64, f: f64) -> Term {
    Term {
        coefficient,
        e_power,
        m,
        m_prime,
        f,
    }
}

const NEW_MOON_TERMS: [Term; 9] = [
    term(-0.40720, 0, 0.0, 1.0, 0.0),
    term(0.17241, 1, 1.0, 0.0, 0.0),
    term(0.01608, 0, 0.0, 2.0, 0.0),
    term(0.01039, 0, 0.0, 0.0, 2.0),
    term(0.00739, 1, -1.0, 1.0, 0.0),
    term(-0.00514, 1, 1.0, 1.0, 0.0),
    term(0.00208, 2, 2.0, 0.0, 0.0),
    term(-0.00111, 0, 0.0, 1.0, -2.0),
    term(-0.00057, 0, 0.0, 1.0, 2.0),
];

const FULL_MOON_TERMS: [Term; 9] = [
    term(-0.40614, 0, 0.0, 1.0, 0.0),
    term(0.17302, 1, 1.0, 0.0, 0.0),
    term(0.01614, 0, 0.0, 2.0, 0.0),
    term(0.01043, 0, 0.0, 0.0, 2.0),
    term(0.00734, 1, -1.0, 1.0, 0.0),
    term(-0.00515, 1, 1.0, 1.0, 0.0),
    term(0.00209, 2, 2.0, 0.0, 0.0),
    term(-0.00111, 0, 0.0, 1.0, -2.0),
    term(-0.00057, 0, 0.0, 1.0, 2.0),
];

const QUARTER_TERMS: [Term; 9] = [
    term(-0.62801, 0, 0.0, 1.0, 0.0),
    term(0.17172, 1, 1.0, 0.0, 0.0),
    term(-0.01183, 1, 1.0, 1.0, 0.0),
    term(0.00862, 0, 0.0, 2.0, 0.0),
    term(0.00804, 0, 0.0, 0.0, 2.0),
    term(0.00454, 1, -1.0, 1.0, 0.0),
    term(0.00204, 2, 2.0, 0.0, 0.0),
    term(-0.00180, 0, 0.0, 1.0, -2.0),
    term(-0.00070, 0, 0.0, 1.0, 2.0),
];

fn centuries(k: f64) -> f64 {
    k / LUNATIONS_PER_CENTURY
}

/// Mean JDE of the phase at real lunation number `k` (phase offset included).
pub fn mean_phase_jde(k: f64) -> f64 {
    let t = centuries(k);
    MEAN_NEW_MOON_JDE + MEAN_SYNODIC_MONTH * k + 0.00015437 * t.powi(2)
        - 0.000000150 * t.powi(3)
        + 0.00000000073 * t.powi(4)
}

pub fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002516 * t - 0.0000074 * t.powi(2)
}

pub fn lunar_arguments(k: f64) -> LunarArguments {
    let t = centuries(k);
    let (t2, t3, t4) = (t.powi(2), t.powi(3), t.powi(4));

    let m = 2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3;
    let m_prime =
        201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4;
    let f = 160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4;
    let omega = 124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3;

    LunarArguments {
        sun_anomaly: deg_to_rad(m),
        moon_anomaly: deg_to_rad(m_prime),
        latitude_argument: deg_to_rad(f),
        ascending_node: deg_to_rad(omega),
        eccentricity: eccentricity_factor(t),
    }
}

fn series_sum(terms: &[Term], args: &LunarArguments) -> f64 {
    terms
        .iter()
        .map(|term| {
            let angle = term.m * args.sun_anomaly
                + term.m_prime * args.moon_anomaly
                + term.f * args.latitude_argument;
            term.coefficient * args.eccentricity.powi(term.e_power) * angle.sin()
        })
        .sum()
}

/// Quarter-phase asymmetry term, positive for first quarter.
fn quarter_asymmetry(args: &LunarArguments) -> f64 {
    0.00306 - 0.00038 * args.eccentricity * args.sun_anomaly.cos()
        + 0.00032 * args.moon_anomaly.cos()
}

/// Periodic correction in days added to the mean phase JDE.
pub fn periodic_correction(phase: MoonPhase, args: &LunarArguments) -> f64 {
    match phase {
        MoonPhase::New => series_sum(&NEW_MOON_TERMS, args),
        MoonPhase::Full => series_sum(&FULL_MOON_TERMS, args),
        MoonPhase::FirstQuarter => series_sum(&QUARTER_TERMS, args) + quarter_asymmetry(args),
        MoonPhase::LastQuarter => series_sum(&QUARTER_TERMS, args) - quarter_asymmetry(args),
    }
}

/// JDE of `phase` in integer lunation `lunation`.
pub fn phase_jde(lunation: i64, phase: MoonPhase) -> f64 {
    let k = lunation as f64 + phase.offset();
    let args = lunar_arguments(k);
    trace!(
        "k={:.2}: M={:.4}° M'={:.4}° F={:.4}° Ω={:.4}° E={:.6}",
        k,
        rad_to_deg(args.sun_anomaly),
        rad_to_deg(args.moon_anomaly),
        rad_to_deg(args.latitude_argument),
        rad_to_deg(args.ascending_node),
        args.eccentricity
    );
    mean_phase_jde(k) + periodic_correction(phase, &args)
}

pub fn jde_to_instant(jde: f64) -> Result<DateTime<Utc>, LunarError> {
    let seconds = (jde - JDE_UNIX_EPOCH) * SECONDS_PER_DAY;
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return Err(LunarError::OutOfRange(jde));
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).ok_or(LunarError::OutOfRange(jde))
}

pub fn phase_time(lunation: i64, phase: MoonPhase) -> Result<DateTime<Utc>, LunarError> {
    jde_to_instant(phase_jde(lunation, phase))
}
