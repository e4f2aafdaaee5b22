//! Output stage drivers

pub mod relay;

pub use relay::{RelayBank, RelayPins};
