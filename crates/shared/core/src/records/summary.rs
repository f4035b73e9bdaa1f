use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity};

/// Summary statistics for the pair header widget.
///
/// Derived on demand from an ordered history batch and never persisted;
/// fields that a short history cannot determine stay `None`, which the
/// widget renders as placeholders. The default value is the summary of an
/// empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSummary {
    /// Price of the most recent trade
    pub last_price: Option<Price>,
    /// Last price minus the previous trade's price
    pub change_absolute: Option<Price>,
    /// Absolute change as a percentage of the previous price
    pub change_percentage: Option<Decimal>,
    /// Quote volume traded inside the trailing window
    pub trailing_volume: Quantity,
}
