//! Washer control engine
//!
//! Owns the phase, the selected program and the phase timer. Driven by a
//! periodic `tick` and by debounced button events.

pub mod valve;
pub mod washer;

pub use valve::select_mix;
pub use washer::{Collaborators, EngineState, WasherEngine};
