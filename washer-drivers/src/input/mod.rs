//! Front panel input drivers

pub mod buttons;

pub use buttons::{ButtonBank, ButtonPins, Debouncer};
