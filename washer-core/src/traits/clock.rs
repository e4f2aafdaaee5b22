//! Wall-clock time source
//!
//! The wall clock only feeds the `hh:mm:ss` readout. Phase timing uses the
//! monotonic millisecond counter passed to the engine instead.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Time of day from the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Create a time of day, rejecting out-of-range fields
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < 24 && minutes < 60 && seconds < 60 {
            Some(Self {
                hours,
                minutes,
                seconds,
            })
        } else {
            None
        }
    }

    /// Build from seconds since midnight (wraps at 24h)
    pub fn from_seconds(total: u32) -> Self {
        let total = total % SECONDS_PER_DAY;
        Self {
            hours: (total / 3600) as u8,
            minutes: ((total / 60) % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Seconds since midnight
    pub fn as_seconds(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// Format as `hh:mm:ss`
    pub fn format(&self) -> String<8> {
        let mut s = String::new();
        // 8 bytes always fit two-digit fields
        let _ = write!(
            s,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        );
        s
    }
}

/// Trait for wall-clock sources (RTC or software clock)
pub trait WallClock {
    /// Current time of day
    fn now(&self) -> TimeOfDay;
}
