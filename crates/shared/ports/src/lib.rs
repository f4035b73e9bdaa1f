//! Meridian Ports
//!
//! Port definitions (traits) for the Meridian terminal's numeric engine.
//! These define the boundaries between the pure quantization routines and
//! the infrastructure that feeds them: the wall clock and the remote
//! ledger/auction query service.

mod clock;
mod error;
mod ledger;

pub use clock::Clock;
pub use error::{QuantError, QuantResult};
pub use ledger::LedgerQuery;
