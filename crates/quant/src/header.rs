//! Summary statistics for the pair header widget.
//!
//! Works over a decimal-normalized history batch ordered oldest to newest.
//! "Now" for the trailing-volume window comes from the injected clock, so
//! the same batch summarized later can legitimately report a smaller
//! window sum.

use chrono::Duration;
use meridian_core::{HeaderSummary, HistoryRecord};
use meridian_ports::Clock;
use rust_decimal::Decimal;

/// Derive the header summary from an ordered history batch.
///
/// A single record determines only the last price; the change fields need a
/// previous trade as well, and stay empty when the previous price is zero
/// (nothing meaningful to divide by). An empty batch yields the default
/// summary - an under-determined header is not an error.
pub fn summarize(records: &[HistoryRecord], window_days: i64, clock: &dyn Clock) -> HeaderSummary {
    let mut summary = HeaderSummary::default();

    let Some(last) = records.last() else {
        return summary;
    };
    summary.last_price = Some(last.price);

    if records.len() >= 2 {
        let previous = records[records.len() - 2].price;
        if !previous.is_zero() {
            let change = last.price - previous;
            summary.change_absolute = Some(change);
            summary.change_percentage = Some(change / previous * Decimal::ONE_HUNDRED);
        }
    }

    let now = clock.now();
    let window_start = now - Duration::days(window_days);
    summary.trailing_volume = records
        .iter()
        .filter(|r| r.timestamp >= window_start && r.timestamp <= now)
        .map(|r| r.volume_in_quote)
        .sum();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use meridian_clock::FixedClock;
    use meridian_core::Timestamp;
    use rust_decimal_macros::dec;

    fn record_at(price: Decimal, quote_volume: Decimal, timestamp: Timestamp) -> HistoryRecord {
        HistoryRecord::new(price, dec!(1), quote_volume, timestamp)
    }

    fn noon(day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_history_yields_default_summary() {
        let clock = FixedClock::new(noon(10));
        let summary = summarize(&[], 1, &clock);
        assert_eq!(summary, HeaderSummary::default());
    }

    #[test]
    fn test_single_record_sets_only_last_price() {
        let clock = FixedClock::new(noon(10));
        let records = vec![record_at(dec!(1.5), dec!(3), noon(10))];
        let summary = summarize(&records, 1, &clock);

        assert_eq!(summary.last_price, Some(dec!(1.5)));
        assert_eq!(summary.change_absolute, None);
        assert_eq!(summary.change_percentage, None);
        assert_eq!(summary.trailing_volume, dec!(3));
    }

    #[test]
    fn test_change_against_previous_trade() {
        let clock = FixedClock::new(noon(10));
        let records = vec![
            record_at(dec!(2.0), dec!(4), noon(9)),
            record_at(dec!(1.5), dec!(3), noon(10)),
        ];
        let summary = summarize(&records, 7, &clock);

        assert_eq!(summary.change_absolute, Some(dec!(-0.5)));
        assert_eq!(summary.change_percentage, Some(dec!(-25)));
    }

    #[test]
    fn test_zero_previous_price_leaves_change_empty() {
        let clock = FixedClock::new(noon(10));
        let records = vec![
            record_at(dec!(0), dec!(0), noon(9)),
            record_at(dec!(1.5), dec!(3), noon(10)),
        ];
        let summary = summarize(&records, 7, &clock);

        assert_eq!(summary.last_price, Some(dec!(1.5)));
        assert_eq!(summary.change_absolute, None);
        assert_eq!(summary.change_percentage, None);
    }

    #[test]
    fn test_trailing_volume_respects_window() {
        let clock = FixedClock::new(noon(10));
        let records = vec![
            record_at(dec!(1), dec!(100), noon(1)), // outside a 3-day window
            record_at(dec!(1), dec!(10), noon(8)),
            record_at(dec!(1), dec!(1), noon(10)),
        ];
        let summary = summarize(&records, 3, &clock);
        assert_eq!(summary.trailing_volume, dec!(11));
    }

    #[test]
    fn test_future_records_are_not_counted() {
        let clock = FixedClock::new(noon(9));
        let records = vec![
            record_at(dec!(1), dec!(10), noon(8)),
            record_at(dec!(1), dec!(1), noon(10)), // ahead of "now"
        ];
        let summary = summarize(&records, 3, &clock);
        assert_eq!(summary.trailing_volume, dec!(10));
    }
}
