//! Meridian Quantization Engine
//!
//! Pure numeric routines between the ledger's integer smallest-unit domain
//! and the terminal's decimal display domain:
//!
//! - [`scale`] - ledger integer <-> display decimal conversion
//! - [`step`] - volume step grid implied by the pair's minimum notional
//! - [`digits`] - order-entry digit limits and keystroke cleanup
//! - [`precision`] - batch-wide display precision for history tables
//! - [`header`] - summary statistics for the pair header widget
//!
//! Every routine is a synchronous, side-effect-free function over value
//! types; the only ambient dependency, wall-clock time, enters through the
//! [`meridian_ports::Clock`] port. Failures are recoverable by design: the
//! entry form disables submission on [`meridian_ports::QuantError`], it
//! never crashes on one.

pub mod digits;
pub mod header;
pub mod precision;
pub mod scale;
pub mod step;

// Re-export the ports the engine is called with for convenience
pub use meridian_ports::{Clock, QuantError, QuantResult};
