use serde::{Deserialize, Serialize};

use crate::values::Quantity;

/// Outcome of fitting a requested base amount to the step grid implied by
/// the pair's minimum notional at a given price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizationResult {
    /// Grid increment the volume was snapped to
    pub step_size: Quantity,
    /// Fractional digits implied by the step size
    pub decimal_places: u32,
    /// Requested amount snapped down to the nearest step multiple
    pub quantized_volume: Quantity,
}
