use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::LunarError;

/// The four primary phases, in the order they occur within one lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::FirstQuarter,
        MoonPhase::Full,
        MoonPhase::LastQuarter,
    ];

    /// Fraction of a lunation added to the integer lunation count.
    pub fn offset(self) -> f64 {
        match self {
            MoonPhase::New => 0.0,
            MoonPhase::FirstQuarter => 0.25,
            MoonPhase::Full => 0.5,
            MoonPhase::LastQuarter => 0.75,
        }
    }
}

impl TryFrom<f64> for MoonPhase {
    type Error = LunarError;

    fn try_from(selector: f64) -> Result<Self, Self::Error> {
        MoonPhase::ALL
            .into_iter()
            .find(|phase| phase.offset() == selector)
            .ok_or(LunarError::InvalidPhaseSelector(selector))
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoonPhase::New => "new moon",
            MoonPhase::FirstQuarter => "first quarter",
            MoonPhase::Full => "full moon",
            MoonPhase::LastQuarter => "last quarter",
        };
        f.write_str(name)
    }
}

/// Mean anomalies and arguments of the series, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    pub sun_anomaly: f64,
    pub moon_anomaly: f64,
    pub latitude_argument: f64,
    pub ascending_node: f64,
    pub eccentricity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEvent {
    pub phase: MoonPhase,
    pub lunation: i64,
    pub instant: DateTime<Utc>,
}

impl PhaseEvent {
    pub fn lunation_number(&self) -> f64 {
        self.lunation as f64 + self.phase.offset()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub candidates: u32,
    pub max_backtrack: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidates: 5,
            max_backtrack: 2,
        }
    }
}
