//! Result formatting.
//!
//! Collapses a number back into the same K/M/G/T/P/E shorthand the keypad
//! accepts, e.g. `1500000` becomes `"1.5 M"`.

use super::normalize::UNITS;

const POWER: f64 = 1000.0;

/// Suffix shown when a value needs more reductions than there are units.
const OVERFLOW_SUFFIX: &str = "?";

/// Format a value with a unit-of-measure suffix.
///
/// The value is divided by 1000 while its magnitude is strictly greater than
/// 1000, so `1000` itself stays `"1000 "`. The output is always the number,
/// one space, and the suffix (empty for values that were not reduced).
pub fn format_magnitude(value: f64) -> String {
    let mut value = value;
    let mut reductions = 0usize;

    while value.abs() > POWER {
        value /= POWER;
        reductions += 1;
    }

    let suffix = match reductions {
        0 => String::new(),
        n if n <= UNITS.len() => UNITS[n - 1].0.to_string(),
        _ => OVERFLOW_SUFFIX.to_string(),
    };

    format!("{} {}", format_plain(value), suffix)
}

/// Render a value in fixed point with trailing zeros and a trailing decimal
/// point removed (`2.50` -> `"2.5"`, `2.0` -> `"2"`). Zero never carries a
/// sign.
pub fn format_plain(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}
