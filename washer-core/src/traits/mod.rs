//! Hardware abstraction traits
//!
//! These traits define the interface between the washer engine and the
//! board-specific collaborators.

pub mod actuator;
pub mod clock;
pub mod display;
pub mod sensor;

pub use actuator::{Actuators, MotorDirection, MotorDrive, ValveMix};
pub use clock::{TimeOfDay, WallClock};
pub use display::{DisplayError, TextPanel, WasherDisplay};
pub use sensor::{SensorError, TemperatureSensor};
