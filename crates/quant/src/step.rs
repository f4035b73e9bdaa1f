//! Volume step grid implied by the pair's minimum notional.
//!
//! The auction protocol fixes the smallest order notional in quote smallest
//! units. At a given price that floor translates into a volume granularity:
//! how many fractional digits of the base asset a single minimum-notional
//! unit is worth. The entry form offers exactly that much precision and
//! snaps the typed amount down onto the grid before submission.
//!
//! Only the order of magnitude of the intermediate ratios matters, so the
//! log-domain arithmetic runs in `f64`; the snapped volume itself is
//! computed in `Decimal`.

use meridian_core::{PairScales, Price, Quantity, QuantizationResult, ScaleSpec, StepSpec};
use meridian_ports::{QuantError, QuantResult};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

/// Extra-digit count past which the log-domain derivation is treated as
/// pathological (price effectively zero) and clamped.
const MAX_EXTRA_DIGITS: i32 = 100;

/// Fractional digits of the base asset that are meaningful for volume
/// entry at `price`, given the pair's minimum notional.
///
/// May be negative for extreme notional floors; the keystroke validator
/// treats any non-positive count as "integer volumes only". Unusable
/// inputs (zero/negative price, unset notional) fall back to the full base
/// precision so the form stays usable.
pub fn decimal_places_for_step(price: Price, step: &StepSpec, pair: &PairScales) -> i32 {
    let base = pair.base.decimals() as i32;
    let quote = pair.quote.decimals() as i32;

    let Some(price_f) = price.to_f64() else {
        return base;
    };

    // Scale the display price back into ledger price units: re-apply the
    // quote factor, then strip the residual base-over-quote scale.
    let price_in_ledger = price_f * 10f64.powi(quote) / 10f64.powi(base - quote);
    let p = price_in_ledger / step.min_notional as f64;

    // Minimum notional is below one base smallest unit at this price; the
    // whole base scale is usable.
    if p >= 1.0 {
        return base;
    }
    if !p.is_finite() || p <= 0.0 {
        return base;
    }

    // Extra fractional digits needed below the base scale.
    let z = (-p.ln() / 10f64.ln()).floor() as i32;
    if z > MAX_EXTRA_DIGITS {
        log::warn!("step derivation needs {z} extra digits at price {price}, clamping");
        return base;
    }
    base - z
}

/// Snap a requested base amount down onto the step grid at `price`.
///
/// The step size is the power of ten matching the smallest viable order
/// (`min_notional / price`); the result is the largest step multiple not
/// exceeding the request, truncated to the base scale with trailing zeros
/// normalized away.
pub fn quantize(
    price: Price,
    requested: Quantity,
    base: &ScaleSpec,
    step: &StepSpec,
) -> QuantResult<QuantizationResult> {
    if price <= Decimal::ZERO {
        return Err(QuantError::InvalidPrice(format!(
            "cannot derive a step grid at price {price}"
        )));
    }

    let decimal_places = if step.min_notional == 0 {
        // No notional floor configured; the base scale is the only grid.
        base.decimals()
    } else {
        let min_order = step.min_notional as f64 / price.to_f64().unwrap_or(f64::INFINITY);
        clamp_places(-min_order.log10().floor())
    };

    let step_size = Decimal::new(1, decimal_places);
    let quantized_volume = requested
        .checked_div(step_size)
        .map(|steps| steps.floor() * step_size)
        .unwrap_or(requested)
        .round_dp_with_strategy(base.decimals(), RoundingStrategy::ToZero)
        .normalize();

    Ok(QuantizationResult {
        step_size,
        decimal_places,
        quantized_volume,
    })
}

/// Bound a raw digit count to what `Decimal` can carry as a scale.
fn clamp_places(places: f64) -> u32 {
    if places.is_nan() || places <= 0.0 {
        return 0;
    }
    if places > ScaleSpec::MAX_DECIMALS as f64 {
        log::debug!(
            "step precision of {places} digits clamped to {}",
            ScaleSpec::MAX_DECIMALS
        );
        return ScaleSpec::MAX_DECIMALS;
    }
    places as u32
}
