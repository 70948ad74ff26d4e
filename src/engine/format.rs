//! Number rounding, parsing and display formatting.
//!
//! Results are rounded to a fixed number of fraction digits and printed in
//! the shortest form that round-trips, the way a calculator display expects:
//! `5` rather than `5.0`, `0.3` rather than `0.30000000000000004`.

/// Fraction digits kept when rounding a computed result.
pub const RESULT_PRECISION: usize = 10;

/// Fraction digits in the exponential display form.
pub const EXPONENTIAL_DIGITS: usize = 6;

/// Magnitudes at or above this print with an exponent.
const EXPONENT_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this print with an exponent.
const EXPONENT_LOWER: f64 = 1e-6;

/// Round to [`RESULT_PRECISION`] fraction digits and re-parse, dropping
/// binary representation noise.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", RESULT_PRECISION, value)
        .parse()
        .unwrap_or(value)
}

/// Parse an operand string. Partial numerals such as `"12."` are accepted.
pub fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Shortest round-trip text for a value.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        signed_exponent(format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Exponential text with `digits` fraction digits, e.g. `1.234568e+9`.
pub fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };
    signed_exponent(format!("{:.*e}", digits, value))
}

/// Text as it should appear on the display.
///
/// Numeric text of at least `threshold` characters switches to exponential
/// form; anything else is passed through for the caller to wrap or scroll.
pub fn display_text(text: &str, threshold: usize) -> String {
    if text.chars().count() < threshold {
        return text.to_string();
    }
    match numeric_value(text) {
        Some(value) => to_exponential(value, EXPONENTIAL_DIGITS),
        None => text.to_string(),
    }
}

/// Value of `text` if the whole string is a number.
fn numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Rust prints `1e21`; a calculator prints `1e+21`.
fn signed_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}
