//! Meridian Clock Infrastructure
//!
//! Implementations of the [`Clock`] port:
//!
//! - [`SystemClock`] - wall-clock time for the live terminal
//! - [`FixedClock`] - frozen, explicitly steppable time for tests
//!
//! The engine never reads ambient time; whichever widget calls the header
//! aggregator passes one of these in. Tests that assert on the trailing
//! volume window freeze a [`FixedClock`] and move it by hand.

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use meridian_ports::Clock;
