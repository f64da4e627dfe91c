pub mod angles;
pub mod error;
pub mod local;
pub mod lunation;
pub mod phase;
pub mod search;
pub mod types;

pub use angles::{deg_to_rad, normalize_fraction, rad_to_deg};

pub use error::LunarError;

pub use local::{to_local_naive, to_naive_in};

pub use lunation::{
    estimate_lunation, new_moon_epoch, DAYS_PER_JULIAN_YEAR, EPOCH_YEAR, LUNATIONS_PER_YEAR,
    NEW_MOON_EPOCH_UNIX,
};

pub use phase::{
    eccentricity_factor, jde_to_instant, lunar_arguments, mean_phase_jde, periodic_correction,
    phase_jde, phase_time, JDE_UNIX_EPOCH, LUNATIONS_PER_CENTURY, MEAN_NEW_MOON_JDE,
    MEAN_SYNODIC_MONTH, SECONDS_PER_DAY,
};

pub use search::{
    next_first_quarter_moon, next_full_moon, next_last_quarter_moon, next_new_moon, next_phase,
    next_phase_with, upcoming_phases, ReferenceTime,
};

pub use types::{LunarArguments, MoonPhase, PhaseEvent, SearchConfig};
