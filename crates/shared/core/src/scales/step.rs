use serde::{Deserialize, Serialize};

use crate::values::RawAmount;

/// Protocol-defined minimum order notional for a pair.
///
/// Expressed in quote-asset smallest units and fixed per deployment; the
/// auction service rejects orders whose notional falls below it. The step
/// quantizer derives volume granularity from this value, so it must be
/// positive to be meaningful. A zero step is treated downstream as
/// "unconstrained" rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    /// Smallest allowed order notional, in quote smallest units
    pub min_notional: RawAmount,
}

impl StepSpec {
    pub fn new(min_notional: RawAmount) -> Self {
        Self { min_notional }
    }
}
