use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal scale of a single asset.
///
/// `decimals` is the number of fractional digits separating the asset's
/// smallest ledger unit from its human display unit (e.g., 8 for a
/// satoshi-style asset). Base and quote assets of a pair carry independent
/// instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ScaleSpec {
    decimals: u32,
}

impl ScaleSpec {
    /// Sentinel scale for assets the terminal has no metadata for.
    ///
    /// Wide enough to be effectively unconstrained for display purposes.
    /// The UI must keep rendering when the ledger lists an asset we have
    /// never heard of, so lookups fall back to this instead of failing.
    pub const UNKNOWN_DECIMALS: u32 = 20;

    /// Largest scale `Decimal` can represent.
    pub const MAX_DECIMALS: u32 = 28;

    /// Create a scale with the given decimal count.
    ///
    /// Counts beyond [`Self::MAX_DECIMALS`] are clamped (and logged) rather
    /// than rejected; the conversion routines cannot carry more scale than
    /// the decimal type supports.
    pub fn new(decimals: u32) -> Self {
        if decimals > Self::MAX_DECIMALS {
            log::warn!(
                "asset scale of {} decimals exceeds supported maximum, clamping to {}",
                decimals,
                Self::MAX_DECIMALS
            );
            return Self {
                decimals: Self::MAX_DECIMALS,
            };
        }
        Self { decimals }
    }

    /// Scale used for assets missing from the registry.
    pub fn unknown() -> Self {
        Self {
            decimals: Self::UNKNOWN_DECIMALS,
        }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// `10^decimals` as an exact `Decimal`.
    ///
    /// This is the multiplier between the asset's smallest unit and its
    /// display unit. Exact for every constructible scale.
    pub fn factor(&self) -> Decimal {
        Decimal::from_i128_with_scale(10i128.pow(self.decimals), 0)
    }
}

// Deserialization goes through the constructor; the clamp applies to
// decoded values too.
impl From<u32> for ScaleSpec {
    fn from(decimals: u32) -> Self {
        Self::new(decimals)
    }
}

impl From<ScaleSpec> for u32 {
    fn from(spec: ScaleSpec) -> u32 {
        spec.decimals
    }
}
