//! Arithmetic library used by the evaluator
//!
//! Every operation rounds its result to the configured number of decimal
//! places, so rounding happens at each step and not once at the end:
//! with 2 places `1/3*3` is `0.99`, not `1`.

use crate::converter::is_numeric_literal;
use crate::Operator;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept when nothing else is configured
pub const DEFAULT_PRECISION: u32 = 8;

/// Largest scale the rounding backend can represent
pub const MAX_PRECISION: u32 = 28;

// Doubles at or above 2^53 have no fractional part left to round
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

pub fn add(a: f64, b: f64, precision: Option<u32>) -> f64 {
    round(a + b, precision)
}

pub fn sub(a: f64, b: f64, precision: Option<u32>) -> f64 {
    round(a - b, precision)
}

pub fn mult(a: f64, b: f64, precision: Option<u32>) -> f64 {
    round(a * b, precision)
}

/// Division by zero yields `inf`, `-inf` or `NaN` rather than an error.
pub fn div(a: f64, b: f64, precision: Option<u32>) -> f64 {
    round(a / b, precision)
}

/// `a` raised to `b`. A base of magnitude 1 with an infinite exponent, or
/// any NaN exponent, yields `NaN` where `powf` would give `1`.
pub fn pow(a: f64, b: f64, precision: Option<u32>) -> f64 {
    if b.is_nan() || (b.is_infinite() && a.abs() == 1.0) {
        return f64::NAN;
    }
    round(a.powf(b), precision)
}

/// Apply a binary operator to `(left, right)`
pub fn apply(op: Operator, left: f64, right: f64, precision: Option<u32>) -> f64 {
    match op {
        Operator::Add => add(left, right, precision),
        Operator::Subtract => sub(left, right, precision),
        Operator::Multiply => mult(left, right, precision),
        Operator::Divide => div(left, right, precision),
        Operator::Power => pow(left, right, precision),
    }
}

/// Round to `precision` decimal places, half away from zero.
///
/// Rounding works on the exact decimal expansion of the double, so `1.005`
/// (stored as 1.00499999…) rounds to `1.00` at two places. `None` leaves the
/// value untouched, as do non-finite values.
pub fn round(value: f64, precision: Option<u32>) -> f64 {
    let Some(places) = precision else {
        return value;
    };
    if !value.is_finite() || value.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    exact
        .round_dp_with_strategy(places.min(MAX_PRECISION), RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Text form of a number as it travels through a postfix sequence.
///
/// Finite values use the shortest decimal form that parses back to the same
/// double; `-0` prints as `0`. Non-finite values print as `Infinity`,
/// `-Infinity` and `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parse operand text produced by the converter or by [`format_number`].
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if is_numeric_literal(text) => text.parse().ok(),
        _ => None,
    }
}
