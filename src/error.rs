use chrono::{DateTime, Utc};

use crate::types::MoonPhase;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    #[error("Invalid phase selector: {0} (must be one of 0.0, 0.25, 0.5, 0.75)")]
    InvalidPhaseSelector(f64),

    #[error("No {phase} found after {after} within {candidates} lunations")]
    SearchExhausted {
        phase: MoonPhase,
        after: DateTime<Utc>,
        candidates: u32,
    },

    #[error("Julian ephemeris day {0} is outside the representable time range")]
    OutOfRange(f64),
}
