//! Wall clock drivers

pub mod soft;

pub use soft::SoftClock;
