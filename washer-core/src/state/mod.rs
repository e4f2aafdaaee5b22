//! Phase state machine
//!
//! Defines the fixed wash cycle and the button events that drive it.
//! The phase set is closed and every phase has exactly one exit rule.

pub mod events;
pub mod machine;

pub use events::ButtonEvent;
pub use machine::{ErrorKind, Exit, Phase};
