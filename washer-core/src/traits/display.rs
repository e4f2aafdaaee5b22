//! Display traits
//!
//! `WasherDisplay` is what the engine talks to. `TextPanel` is the
//! lower-level character device a status screen renders onto.

use crate::state::Phase;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Chip select pin could not be driven
    ChipSelect,
}

/// Trait for the washer status display
///
/// All calls are fire-and-forget. A display that fails to render must not
/// affect the caller.
pub trait WasherDisplay {
    /// Show the current phase and selected program
    fn show_phase(&mut self, phase: Phase, program: u8);

    /// Show a newly selected program while idle
    fn show_selected_program(&mut self, program: u8);

    /// Show the formatted `hh:mm:ss` time readout
    fn show_time(&mut self, time: &str);
}

/// Trait for character displays addressed by row and column
pub trait TextPanel {
    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text starting at a position
    fn write_line(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;
}
