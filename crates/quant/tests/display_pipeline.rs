//! Integration test: query rows -> conversion -> normalization -> header
//!
//! Drives the same path the table renderer and header widget take, from
//! raw integer rows to a stamped batch and a summary, with time frozen.

use chrono::{Duration, TimeZone, Utc};
use meridian_clock::FixedClock;
use meridian_core::{PairScales, RawTradeRow};
use meridian_quant::{header, precision, scale};
use rust_decimal_macros::dec;

#[test]
fn test_rows_to_stamped_records_to_summary() {
    let _ = env_logger::builder().is_test(true).try_init();

    let pair = PairScales::from_decimals(8, 6);
    let day = |d| Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap();

    let rows = vec![
        RawTradeRow::new(150_000_000, 200_000_000, day(8)),
        RawTradeRow::new(140_000_000, 50_000_000, day(9)),
        RawTradeRow::new(150_000_000, 100_000_000, day(10)),
    ];

    let records: Vec<_> = rows
        .iter()
        .map(|row| scale::record_from_row(row, &pair))
        .collect();

    // Raw 150000000 at 8/6 decimals is 1.5 quote per base; raw volume
    // 200000000 is 2.0 base, 3.0 quote.
    assert_eq!(records[0].price, dec!(1.5));
    assert_eq!(records[0].volume_in_base, dec!(2.0));
    assert_eq!(records[0].volume_in_quote, dec!(3.0));

    let stamped = precision::normalize(&records, 1);
    // Prices 1.5 / 1.4 / 1.5 need one place for the first significant
    // digit plus one extra; quote volumes 3 / 0.7 / 1.5 likewise.
    for record in &stamped {
        assert_eq!(record.price_precision, Some(2));
        assert_eq!(record.base_precision, Some(2));
        assert_eq!(record.quote_precision, Some(2));
        assert!(record.is_stamped());
    }

    let clock = FixedClock::new(day(10));
    let summary = header::summarize(&stamped, 1, &clock);

    assert_eq!(summary.last_price, Some(dec!(1.5)));
    assert_eq!(summary.change_absolute, Some(dec!(0.1)));
    // (1.5 - 1.4) / 1.4 * 100
    let pct = summary.change_percentage.unwrap();
    assert_eq!(pct.round_dp(4), dec!(7.1429));
    // One-day window: the day-9 trade sits exactly on the inclusive edge
    // and still counts; only the day-8 trade is outside.
    assert_eq!(summary.trailing_volume, dec!(2.2));
}

#[test]
fn test_summary_changes_as_frozen_clock_moves() {
    let pair = PairScales::from_decimals(8, 6);
    let day = |d| Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap();

    let rows = vec![
        RawTradeRow::new(150_000_000, 200_000_000, day(8)),
        RawTradeRow::new(150_000_000, 100_000_000, day(10)),
    ];
    let records: Vec<_> = rows
        .iter()
        .map(|row| scale::record_from_row(row, &pair))
        .collect();

    let clock = FixedClock::new(day(10));
    let before = header::summarize(&records, 3, &clock);
    assert_eq!(before.trailing_volume, dec!(4.5));

    // Same records, later "now": the day-8 trade slides out of the window.
    clock.advance(Duration::days(4));
    let after = header::summarize(&records, 3, &clock);
    assert_eq!(after.trailing_volume, dec!(0));
}
