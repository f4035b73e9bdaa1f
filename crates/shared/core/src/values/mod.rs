use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price in quote-per-base display units - uses Decimal for precision
pub type Price = Decimal;

/// Volume/amount in display units - uses Decimal for precision
pub type Quantity = Decimal;

/// Integer amount in an asset's smallest ledger unit.
///
/// The query service never returns floating point; every price and volume
/// arrives as one of these plus a per-asset decimal count.
pub type RawAmount = u128;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for an asset or a trading pair
pub type Symbol = String;
