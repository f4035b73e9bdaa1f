use serde::{Deserialize, Serialize};

use crate::values::{RawAmount, Timestamp};

/// One historical trade exactly as the query service returns it.
///
/// Price and volume are integers in smallest ledger units; the matching
/// [`crate::scales::PairScales`] is announced separately per asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTradeRow {
    /// Trade price in ledger price units
    pub raw_price: RawAmount,
    /// Traded volume in base-asset smallest units
    pub raw_volume: RawAmount,
    /// Execution time reported by the ledger
    pub timestamp: Timestamp,
}

impl RawTradeRow {
    pub fn new(raw_price: RawAmount, raw_volume: RawAmount, timestamp: Timestamp) -> Self {
        Self {
            raw_price,
            raw_volume,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_raw_row_json_round_trip() {
        let row = RawTradeRow::new(150_000_000, 200_000_000, Utc::now());
        let json = serde_json::to_string(&row).unwrap();
        let decoded: RawTradeRow = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, row);
    }

    #[test]
    fn test_raw_row_amounts_stay_integral_in_json() {
        let row = RawTradeRow::new(
            340_282_366_920_938_463_463_374_607_431_768_211_455, // u128::MAX
            1,
            Utc::now(),
        );
        let json = serde_json::to_string(&row).unwrap();
        // No exponent notation, no fractional part on the wire
        assert!(json.contains("340282366920938463463374607431768211455"));
    }
}
