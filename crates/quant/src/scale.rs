//! Ledger-unit scale conversion.
//!
//! The query service reports prices and volumes as integers in smallest
//! ledger units. Conversion to display decimals stays in `Decimal` end to
//! end: assets commonly carry 18 decimals, and integers of that size do not
//! survive a round trip through an `f64` mantissa. Only the presentation
//! layer may round the results further.
//!
//! A raw ledger price carries the combined pair scale - removing it and
//! re-applying the quote scale nets out to a division by the base factor,
//! yielding quote-per-base display units.

use meridian_core::{HistoryRecord, PairScales, Price, Quantity, RawAmount, RawTradeRow, ScaleSpec};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Widen a raw ledger integer into the decimal domain.
///
/// Amounts past `Decimal`'s 96-bit coefficient cannot be displayed at all;
/// saturating keeps the table rendering instead of unwinding into it.
fn decimal_from_raw(raw: RawAmount) -> Decimal {
    match Decimal::from_u128(raw) {
        Some(value) => value,
        None => {
            log::warn!("raw amount {raw} exceeds the representable decimal range, saturating");
            Decimal::MAX
        }
    }
}

/// Convert a raw ledger price to quote-per-base display units.
///
/// No rounding happens here; any precision decision is deferred to the
/// precision normalizer.
pub fn price_from_ledger(raw_price: RawAmount, pair: &PairScales) -> Price {
    decimal_from_raw(raw_price) / pair.base.factor()
}

/// Inverse of [`price_from_ledger`]: display price back into ledger price
/// units. Exact for every price that itself came off the ledger.
pub fn price_to_ledger(price: Price, pair: &PairScales) -> Decimal {
    price * pair.base.factor()
}

/// Convert a raw base-asset volume to display units, in both denominations.
///
/// Returns `(volume_in_base, volume_in_quote)`; the quote leg is the base
/// leg multiplied by the trade price.
pub fn volume_from_ledger(
    raw_volume: RawAmount,
    base: &ScaleSpec,
    price: Price,
) -> (Quantity, Quantity) {
    let volume_in_base = decimal_from_raw(raw_volume) / base.factor();
    let volume_in_quote = volume_in_base * price;
    (volume_in_base, volume_in_quote)
}

/// Display base amount back into smallest ledger units, rounded to the
/// nearest unit.
///
/// Fractional input beyond the base scale is rounded silently - the entry
/// form pre-truncates keystrokes, so anything reaching this point is
/// best-effort by contract. Negative amounts saturate to zero.
pub fn volume_to_ledger(base_amount: Quantity, base: &ScaleSpec) -> RawAmount {
    (base_amount * base.factor())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .unwrap_or(0)
}

/// Convert one raw history row into an unstamped display record.
pub fn record_from_row(row: &RawTradeRow, pair: &PairScales) -> HistoryRecord {
    let price = price_from_ledger(row.raw_price, pair);
    let (volume_in_base, volume_in_quote) = volume_from_ledger(row.raw_volume, &pair.base, price);
    HistoryRecord::new(price, volume_in_base, volume_in_quote, row.timestamp)
}
