//! Display drivers
//!
//! [`SpiTextPanel`] talks to the character display; [`StatusScreen`]
//! lays out the washer status on any [`TextPanel`](washer_core::traits::TextPanel).

pub mod panel;
pub mod status;

pub use panel::SpiTextPanel;
pub use status::StatusScreen;
