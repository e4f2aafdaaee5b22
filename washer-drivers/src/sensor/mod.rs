//! Temperature sensor drivers

pub mod linear;

pub use linear::{AdcReader, LinearAdcSensor, ADC_MAX};
