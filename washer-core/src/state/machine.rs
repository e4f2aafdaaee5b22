//! Phase definition
//!
//! The wash cycle is a fixed ring of phases. Each phase has exactly one
//! successor, reached either immediately, after a dwell time, or never
//! (the idle and error sinks).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wash cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Phase {
    /// Waiting for Start; all outputs off
    #[default]
    Idle = 0,
    /// Valves open, drum filling
    FillWater = 1,
    /// Wash (single undivided phase)
    Wash = 2,
    /// Rinse (single undivided phase)
    Rinse = 3,
    /// Forward spin, then back to idle
    Spin = 4,
    /// Fault; outputs disabled until Stop
    Error = 5,
}

/// Types of faults the engine models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// A phase code outside the known set
    UnrecognizedPhase,
}

/// How a phase is left on tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exit {
    /// Held until a button or fault moves it
    Never,
    /// Left on the next tick
    Immediate,
    /// Left once the fill dwell time has elapsed
    AfterFillDwell,
}

impl Phase {
    /// Every phase, in cycle order
    pub const ALL: [Phase; 6] = [
        Phase::Idle,
        Phase::FillWater,
        Phase::Wash,
        Phase::Rinse,
        Phase::Spin,
        Phase::Error,
    ];

    /// The designated successor reached on tick, if any
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Idle => None,
            Phase::FillWater => Some(Phase::Wash),
            Phase::Wash => Some(Phase::Rinse),
            Phase::Rinse => Some(Phase::Spin),
            Phase::Spin => Some(Phase::Idle),
            Phase::Error => None,
        }
    }

    /// Exit rule applied by the engine on tick
    pub fn exit(self) -> Exit {
        match self {
            Phase::Idle | Phase::Error => Exit::Never,
            Phase::FillWater => Exit::AfterFillDwell,
            Phase::Wash | Phase::Rinse | Phase::Spin => Exit::Immediate,
        }
    }

    /// Check if this phase requires every actuator to be off
    pub fn is_safe_state(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Error)
    }

    /// Check if user program selection is accepted
    pub fn accepts_selection(&self) -> bool {
        *self == Phase::Idle
    }

    /// Short uppercase label for the status display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::FillWater => "FILL WATER",
            Phase::Wash => "WASH",
            Phase::Rinse => "RINSE",
            Phase::Spin => "SPIN",
            Phase::Error => "ERROR",
        }
    }

    /// Raw phase code
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Phase {
    type Error = ErrorKind;

    fn try_from(code: u8) -> Result<Self, ErrorKind> {
        Phase::ALL
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or(ErrorKind::UnrecognizedPhase)
    }
}
