//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in washer-core, built on the `embedded-hal` 1.0 traits:
//!
//! - Relay bank for the water valves and drum motor
//! - Debounced front panel buttons
//! - Linear ADC temperature sensor
//! - Software wall clock
//! - SPI character display and status screen

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod clock;
pub mod display;
pub mod input;
pub mod sensor;
