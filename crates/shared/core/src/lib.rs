//! Meridian Core Domain
//!
//! Pure domain types for the Meridian terminal's quantization engine.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! Everything here is a value type: transformations elsewhere in the
//! workspace take these by reference or by value and return new instances,
//! never mutate shared state.

pub mod records;
pub mod scales;
pub mod values;

// Re-export commonly used types at crate root
pub use records::{HeaderSummary, HistoryRecord, QuantizationResult, RawTradeRow};
pub use scales::{PairScales, ScaleRegistry, ScaleSpec, StepSpec};
pub use values::{Price, Quantity, RawAmount, Symbol, Timestamp};
