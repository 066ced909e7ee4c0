//! Display number formatting and operand parsing
//!
//! Every computed value passes through [`format_number`] before it reaches the
//! display, and every display string passes through [`parse_operand`] before it
//! takes part in a calculation.
//!
//! | Value | Display |
//! |-------|---------|
//! | `4.0` | `4` |
//! | `1.0 / 3.0` | `0.33333333` |
//! | `2.5` | `2.5` |
//! | `1.0 / 512.0` | `0.00195313` |
//! | `1e-12` | `0` |
//! | `NaN` | `NaN` |

use crate::error::{CalcError, Result};

/// Number of fractional digits kept for non-integral results
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Largest magnitude where every integral f64 is exactly representable as i64
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// 2^9: only multiples of 2^-9 can fall exactly halfway between 8-digit decimals
const HALF_STEP_DENOMINATOR: f64 = 512.0;

/// 10^8 / 2^9 = 390625 / 2
const HALF_STEP_NUMERATOR: u128 = 390_625;

const FRACTION_SCALE: u128 = 100_000_000;

/// Format a computed value for the display
///
/// Integral values print without a fractional part. Everything else is
/// rounded to 8 fractional digits with trailing zeros (and a dangling `.`)
/// stripped.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value % 1.0 == 0.0 {
        return format_integral(value);
    }

    let fixed = to_fixed(value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Integral values: stack-formatted when they fit i64 exactly, otherwise
/// printed in full positional notation so the display never carries an exponent
#[inline]
fn format_integral(value: f64) -> String {
    if value.abs() <= EXACT_INT_LIMIT {
        let mut buffer = itoa::Buffer::new();
        // -0.0 casts to 0
        buffer.format(value as i64).to_string()
    } else {
        format!("{:.0}", value)
    }
}

/// Round to 8 fractional digits, ties away from zero
///
/// The float formatter breaks exact ties towards even, so values on a 2^-9
/// grid (the only ones that can tie) are rounded with integer arithmetic.
fn to_fixed(value: f64) -> String {
    let steps = value.abs() * HALF_STEP_DENOMINATOR;
    if steps.fract() != 0.0 {
        return format!("{:.*}", MAX_FRACTION_DIGITS, value);
    }

    // value * 10^8 = steps * 390625 / 2; non-integral values stay below 2^52
    let doubled = steps as u128 * HALF_STEP_NUMERATOR;
    let units = (doubled + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{:0width$}",
        units / FRACTION_SCALE,
        units % FRACTION_SCALE,
        width = MAX_FRACTION_DIGITS
    )
}

/// Parse display text into a finite operand
pub fn parse_operand(text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_operand(text)),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_large_integral_has_no_exponent() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert!(!format_number(-3e25).contains('e'));
    }

    #[test]
    fn test_fraction_rounding_and_stripping() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(2.0 / 3.0), "0.66666667");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-1.25), "-1.25");
        // exact binary ties round away from zero
        assert_eq!(format_number(1.0 / 512.0), "0.00195313");
        assert_eq!(format_number(-1.0 / 512.0), "-0.00195313");
        assert_eq!(format_number(3.0 / 512.0), "0.00585938");
        assert_eq!(format_number(1000.0 + 5.0 / 512.0), "1000.00976563");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_number(1e-12), "0");
        assert_eq!(format_number(-1e-12), "0");
        // sin(pi) in floating point
        assert_eq!(format_number(std::f64::consts::PI.sin()), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("42").unwrap(), 42.0);
        assert_eq!(parse_operand("0.").unwrap(), 0.0);
        assert_eq!(parse_operand("-4").unwrap(), -4.0);
        assert_eq!(parse_operand("3.25").unwrap(), 3.25);
    }

    #[test]
    fn test_parse_operand_rejects_non_finite() {
        for text in ["NaN", "Infinity", "-Infinity", "", "1.2.3", "abc"] {
            assert_eq!(
                parse_operand(text),
                Err(CalcError::invalid_operand(text)),
                "text={text:?}"
            );
        }
    }

    #[test]
    fn test_formatted_output_parses_back() {
        for value in [7.0, -4.0, 0.125, 1.0 / 7.0, 123456.789] {
            let text = format_number(value);
            assert!(parse_operand(&text).is_ok(), "text={text:?}");
        }
    }
}
