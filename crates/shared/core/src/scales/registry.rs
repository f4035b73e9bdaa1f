use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{PairScales, ScaleSpec};
use crate::values::Symbol;

/// Per-asset scale metadata as announced by the query service.
///
/// Lookups never fail: an asset the service has not described resolves to
/// [`ScaleSpec::unknown`], so the terminal keeps rendering unrecognized
/// listings instead of crashing on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaleRegistry {
    scales: HashMap<Symbol, ScaleSpec>,
}

impl ScaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the scale for an asset.
    pub fn insert(&mut self, asset: impl Into<Symbol>, decimals: u32) {
        self.scales.insert(asset.into(), ScaleSpec::new(decimals));
    }

    /// Scale for an asset, falling back to the unknown-asset sentinel.
    pub fn resolve(&self, asset: &str) -> ScaleSpec {
        match self.scales.get(asset) {
            Some(spec) => *spec,
            None => {
                log::warn!("no scale registered for asset {asset}, using display-only fallback");
                ScaleSpec::unknown()
            }
        }
    }

    /// Pair scales for a base/quote asset pair.
    pub fn resolve_pair(&self, base: &str, quote: &str) -> PairScales {
        PairScales::new(self.resolve(base), self.resolve(quote))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
