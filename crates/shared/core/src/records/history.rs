use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Timestamp};

/// One converted trade-history row in display units.
///
/// Created by the scale converter from a [`super::RawTradeRow`]; the
/// precision fields start empty and are stamped exactly once by the
/// precision normalizer, which hands back new records rather than mutating
/// in place. After stamping the record is immutable and owned by the
/// display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub price: Price,
    pub volume_in_base: Quantity,
    pub volume_in_quote: Quantity,
    pub timestamp: Timestamp,
    /// Fractional digits the price column renders with, shared batch-wide
    pub price_precision: Option<u32>,
    /// Fractional digits the base-volume column renders with
    pub base_precision: Option<u32>,
    /// Fractional digits the quote-volume column renders with
    pub quote_precision: Option<u32>,
}

impl HistoryRecord {
    /// Create an unstamped record from already-converted display values.
    pub fn new(
        price: Price,
        volume_in_base: Quantity,
        volume_in_quote: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            price,
            volume_in_base,
            volume_in_quote,
            timestamp,
            price_precision: None,
            base_precision: None,
            quote_precision: None,
        }
    }

    /// Stamp the shared display precision for all three columns.
    pub fn with_precisions(mut self, price: u32, base: u32, quote: u32) -> Self {
        self.price_precision = Some(price);
        self.base_precision = Some(base);
        self.quote_precision = Some(quote);
        self
    }

    /// Whether the normalizer has stamped this record yet.
    pub fn is_stamped(&self) -> bool {
        self.price_precision.is_some()
            && self.base_precision.is_some()
            && self.quote_precision.is_some()
    }
}
