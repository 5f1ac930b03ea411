//! Numeric field parsers.

use crate::error::FieldError;

use super::{scalar, Parser};

/// Parses a base-10 integer.
///
/// Fails with [`FieldError::MustBeInt`] and yields `0`.
pub fn parse_int() -> Parser<i64> {
    scalar(FieldError::MustBeInt, i64::default, |input| input.parse().ok())
}

/// Parses a decimal number.
///
/// Bare integers such as `"3"` are accepted and converted. Infinities and
/// NaN are rejected. Fails with [`FieldError::MustBeFloat`] and yields `0.0`.
pub fn parse_float() -> Parser<f64> {
    scalar(FieldError::MustBeFloat, f64::default, parse_decimal)
}

fn parse_decimal(input: &str) -> Option<f64> {
    if let Ok(n) = input.parse::<i64>() {
        return Some(n as f64);
    }
    // Rust's float grammar also accepts "inf" and "NaN"
    if !input
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    input.parse::<f64>().ok().filter(|n| n.is_finite())
}
