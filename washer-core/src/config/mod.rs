//! Configuration types
//!
//! Board-agnostic configuration structures and the `washer.toml` parser.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
