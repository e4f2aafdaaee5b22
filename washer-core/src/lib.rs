//! Board-agnostic core logic for the washer controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (actuators, display, clock, sensor)
//! - Phase state machine and button events
//! - Washer control engine and valve policy
//! - Configuration types and the `washer.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod state;
pub mod traits;
