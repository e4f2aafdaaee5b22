//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod controller;
pub mod input;

pub use controller::controller_task;
pub use input::input_task;

use embassy_time::Instant;

/// Monotonic milliseconds since boot (wraps after ~49 days)
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}
