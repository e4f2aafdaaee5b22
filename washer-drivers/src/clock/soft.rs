//! Software wall clock
//!
//! Keeps time of day by accumulating the monotonic millisecond counter
//! from a seeded start time. Call [`SoftClock::sync`] before reading so the
//! elapsed time is folded in. Wraps at midnight.

use washer_core::traits::clock::SECONDS_PER_DAY;
use washer_core::traits::{TimeOfDay, WallClock};

pub struct SoftClock {
    /// Seconds since midnight
    seconds: u32,
    /// Milliseconds not yet carried into `seconds`
    sub_ms: u32,
    /// Monotonic timestamp of the last sync
    last_ms: u32,
}

impl SoftClock {
    /// Start the clock at `start`, anchored to monotonic time `now_ms`
    pub fn new(start: TimeOfDay, now_ms: u32) -> Self {
        Self {
            seconds: start.as_seconds(),
            sub_ms: 0,
            last_ms: now_ms,
        }
    }

    /// Fold in the time elapsed since the last sync
    pub fn sync(&mut self, now_ms: u32) {
        let delta = now_ms.wrapping_sub(self.last_ms);
        self.last_ms = now_ms;

        let carry = self.sub_ms + delta % 1000;
        self.sub_ms = carry % 1000;

        let whole = delta / 1000 + carry / 1000;
        self.seconds = (self.seconds + whole % SECONDS_PER_DAY) % SECONDS_PER_DAY;
    }
}

impl WallClock for SoftClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_seconds(self.seconds)
    }
}
