//! Order-entry digit limits and keystroke cleanup.
//!
//! Both routines run per keystroke, so they must behave on partially-typed
//! text (a trailing bare decimal point, stray pasted characters) without
//! failing. Cleanup operates on the text itself, not the parsed value.

use meridian_core::Price;
use rust_decimal::prelude::ToPrimitive;

/// Absolute slack when checking whether the scaled price lands on an
/// integer; tolerates float round-off without admitting a real extra digit.
const DIGIT_TOLERANCE: f64 = 1e-10;

/// Whether `price` fits within `max_significant_digits` significant digits.
///
/// Zero is always valid - there are no digits to violate the limit.
pub fn price_within_digit_limit(price: Price, max_significant_digits: u32) -> bool {
    if price.is_zero() {
        return true;
    }
    let Some(value) = price.abs().to_f64() else {
        return false;
    };

    let exponent = value.log10().floor() as i32;
    let scaled = value * 10f64.powi(max_significant_digits as i32 - 1 - exponent);
    (scaled - scaled.round()).abs() <= DIGIT_TOLERANCE
}

/// Clean a typed volume string down to digits and at most
/// `max_fractional_digits` fractional places.
///
/// Keeps ASCII digits and the first decimal point only; every later point
/// is deleted. The fractional part is truncated, never rounded. A
/// non-positive digit budget drops the fractional part (and the point)
/// entirely. Input with no usable characters reduces to the empty string.
pub fn truncate_volume_input(raw: &str, max_fractional_digits: i32) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut seen_point = false;
    let mut fractional_digits = 0i32;

    for ch in raw.chars() {
        match ch {
            '0'..='9' => {
                if seen_point {
                    if max_fractional_digits <= 0 || fractional_digits >= max_fractional_digits {
                        continue;
                    }
                    fractional_digits += 1;
                }
                cleaned.push(ch);
            }
            '.' if !seen_point => {
                seen_point = true;
                if max_fractional_digits > 0 {
                    cleaned.push('.');
                }
            }
            _ => {}
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_digit_limit_boundary() {
        assert!(price_within_digit_limit(dec!(123.45), 5));
        assert!(!price_within_digit_limit(dec!(123.456), 5));
    }

    #[test]
    fn test_zero_price_always_within_limit() {
        assert!(price_within_digit_limit(dec!(0), 1));
    }

    #[test]
    fn test_digit_limit_ignores_magnitude() {
        // Significant digits, not fractional ones
        assert!(price_within_digit_limit(dec!(0.0012345), 5));
        assert!(!price_within_digit_limit(dec!(0.00123456), 5));
        assert!(price_within_digit_limit(dec!(12345), 5));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_digits() {
        assert!(price_within_digit_limit(dec!(123.40), 5));
        assert!(price_within_digit_limit(dec!(100.00), 3));
    }

    #[test]
    fn test_truncate_strips_foreign_characters() {
        assert_eq!(truncate_volume_input("12.3456abc", 2), "12.34");
        assert_eq!(truncate_volume_input("1,234", 2), "1234");
    }

    #[test]
    fn test_truncate_collapses_extra_points() {
        assert_eq!(truncate_volume_input("1..2", 2), "1.2");
        assert_eq!(truncate_volume_input("1.2.3", 2), "1.23");
    }

    #[test]
    fn test_truncate_does_not_round() {
        assert_eq!(truncate_volume_input("0.999", 2), "0.99");
    }

    #[test]
    fn test_truncate_drops_fraction_for_integer_only_input() {
        assert_eq!(truncate_volume_input("12.34", 0), "12");
        assert_eq!(truncate_volume_input("12.34", -3), "12");
    }

    #[test]
    fn test_truncate_tolerates_partial_input() {
        // A bare trailing point is legitimate mid-typing state
        assert_eq!(truncate_volume_input("12.", 2), "12.");
        assert_eq!(truncate_volume_input(".5", 2), ".5");
    }

    #[test]
    fn test_truncate_punctuation_only_reduces_to_empty() {
        assert_eq!(truncate_volume_input("abc-!", 2), "");
        assert_eq!(truncate_volume_input("", 2), "");
    }
}
