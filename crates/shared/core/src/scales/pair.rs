use serde::{Deserialize, Serialize};

use super::ScaleSpec;

/// The two independent decimal scales of a trading pair.
///
/// Prices compose both scales multiplicatively, which is why conversions
/// take the pair rather than a single asset scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairScales {
    /// Scale of the asset being bought/sold
    pub base: ScaleSpec,
    /// Scale of the asset the price is expressed in
    pub quote: ScaleSpec,
}

impl PairScales {
    pub fn new(base: ScaleSpec, quote: ScaleSpec) -> Self {
        Self { base, quote }
    }

    /// Pair scales from plain decimal counts
    pub fn from_decimals(base_decimals: u32, quote_decimals: u32) -> Self {
        Self {
            base: ScaleSpec::new(base_decimals),
            quote: ScaleSpec::new(quote_decimals),
        }
    }
}
