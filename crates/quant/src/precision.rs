//! Batch-wide display precision for history tables.
//!
//! Rounding each row on its own gives a table of ragged widths that jitter
//! as rows stream in. Instead the whole batch is scanned for the largest
//! precision any row needs per column, and every row is stamped with that
//! shared count. Two passes are required: the maximum is not known until
//! the last row has been seen.

use meridian_core::{HistoryRecord, Quantity};

/// Fractional digits needed to show `value`'s first significant fractional
/// digit plus `extra_significant_digits` more; zero for integers.
///
/// Works on the canonical text form. `Decimal` renders plain notation at
/// every magnitude, so the digit positions can be read straight off the
/// string - there is no scientific-notation form to expand first.
pub fn significant_decimal_places(value: Quantity, extra_significant_digits: u32) -> u32 {
    let text = value.normalize().to_string();
    let Some(dot) = text.find('.') else {
        return 0;
    };
    let fraction = &text[dot + 1..];
    match fraction.find(|c: char| c != '0') {
        Some(index) => index as u32 + 1 + extra_significant_digits,
        // Unreachable after normalize(), but a zero fraction is an integer
        None => 0,
    }
}

/// Stamp every record with the per-column maximum precision of the batch.
///
/// First pass collects the maxima over price, base volume, and quote
/// volume; second pass writes them onto every record. Returns new records
/// (input order preserved); the empty batch stays empty. Idempotent: the
/// stamped precision never feeds back into the computation.
pub fn normalize(records: &[HistoryRecord], extra_significant_digits: u32) -> Vec<HistoryRecord> {
    let mut price_places = 0u32;
    let mut base_places = 0u32;
    let mut quote_places = 0u32;

    for record in records {
        price_places =
            price_places.max(significant_decimal_places(record.price, extra_significant_digits));
        base_places = base_places.max(significant_decimal_places(
            record.volume_in_base,
            extra_significant_digits,
        ));
        quote_places = quote_places.max(significant_decimal_places(
            record.volume_in_quote,
            extra_significant_digits,
        ));
    }

    records
        .iter()
        .map(|record| {
            record
                .clone()
                .with_precisions(price_places, base_places, quote_places)
        })
        .collect()
}
