use meridian_core::RawTradeRow;

use crate::error::QuantResult;

/// Port for the remote ledger/auction query service.
///
/// The engine itself never talks to the network; the terminal's data layer
/// implements this trait and hands the resulting integer rows to the scale
/// converter. Only the parts of the service the numeric core consumes are
/// modeled here.
pub trait LedgerQuery: Send + Sync {
    /// Most recent trades for a pair, oldest first, at most `limit` rows.
    fn trade_history(&self, pair: &str, limit: usize) -> QuantResult<Vec<RawTradeRow>>;

    /// Decimal count the ledger announces for an asset, if it is listed.
    ///
    /// Callers feed this into a [`meridian_core::ScaleRegistry`]; a `None`
    /// becomes the unknown-asset sentinel there, not an error.
    fn asset_decimals(&self, asset: &str) -> Option<u32>;
}
