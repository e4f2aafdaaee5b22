//! Actuator traits
//!
//! The washer drives four digital outputs: hot and cold water valves and
//! the forward/reverse windings of the drum motor. The engine never reads
//! them back; implementations are fire-and-forget.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Water valve combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValveMix {
    /// Hot water valve open
    pub hot: bool,
    /// Cold water valve open
    pub cold: bool,
}

impl ValveMix {
    /// Both valves closed
    pub const CLOSED: Self = Self {
        hot: false,
        cold: false,
    };
    /// Hot water only
    pub const HOT_ONLY: Self = Self {
        hot: true,
        cold: false,
    };
    /// Cold water only
    pub const COLD_ONLY: Self = Self {
        hot: false,
        cold: true,
    };
    /// Both valves open
    pub const BLEND: Self = Self {
        hot: true,
        cold: true,
    };
}

/// Drum motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotorDirection {
    #[default]
    Forward,
    Reverse,
}

/// Drum motor output command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDrive {
    /// Both windings released
    #[default]
    Off,
    /// Forward winding on, reverse off
    Forward,
    /// Reverse winding on, forward off
    Reverse,
}

impl MotorDrive {
    /// Drive command for a rotation direction
    pub fn running(direction: MotorDirection) -> Self {
        match direction {
            MotorDirection::Forward => MotorDrive::Forward,
            MotorDirection::Reverse => MotorDrive::Reverse,
        }
    }
}

/// Trait for the washer's output stage
///
/// Implementations switch relays, SSRs or MOSFETs. Errors from the
/// underlying pins are not reported to the caller.
pub trait Actuators {
    /// Open or close the water valves
    fn set_valves(&mut self, mix: ValveMix);

    /// Drive the drum motor
    fn set_motor(&mut self, drive: MotorDrive);

    /// Drive every output to its safe (off) state
    fn all_off(&mut self) {
        self.set_motor(MotorDrive::Off);
        self.set_valves(ValveMix::CLOSED);
    }
}
