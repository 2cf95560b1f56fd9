//! Input normalization.
//!
//! Rewrites keypad text into plain arithmetic the parser understands:
//! calculator symbols become ASCII operators and unit letters become zeros.

use tracing::debug;

/// Unit suffixes and the power of ten each one stands for.
///
/// Index `n` (1-based) is the suffix for `1000^n`, which lets the formatter
/// reuse the same table when collapsing results.
pub const UNITS: [(char, u32); 6] = [
    ('K', 3),
    ('M', 6),
    ('G', 9),
    ('T', 12),
    ('P', 15),
    ('E', 18),
];

/// Normalize raw calculator input.
///
/// Steps run in a fixed order: `÷` to `/`, `x` to `*`, strip whitespace,
/// upper-case, then expand unit letters. Expansion is a literal text
/// substitution, so it is only meaningful after a whole number:
/// `"5K"` becomes `"5000"` but `"1.2K"` becomes `"1.2000"`.
pub fn normalize(raw: &str) -> String {
    let replaced = raw.replace('÷', "/").replace('x', "*");

    let mut normalized: String = replaced
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    for (letter, exponent) in UNITS {
        if normalized.contains(letter) {
            normalized = normalized.replace(letter, &"0".repeat(exponent as usize));
        }
    }

    debug!(raw, normalized = %normalized, "normalized expression");
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_expansion() {
        assert_eq!(normalize("5K"), "5000");
        assert_eq!(normalize("3M"), "3000000");
        assert_eq!(normalize("1G"), "1000000000");
        assert_eq!(normalize("2T"), format!("2{}", "0".repeat(12)));
        assert_eq!(normalize("7P"), format!("7{}", "0".repeat(15)));
        assert_eq!(normalize("9E"), format!("9{}", "0".repeat(18)));
    }

    #[test]
    fn test_lowercase_units() {
        assert_eq!(normalize("5k"), "5000");
        assert_eq!(normalize("2m+1k"), "2000000+1000");
    }

    #[test]
    fn test_symbol_substitution() {
        assert_eq!(normalize("7x8"), "7*8");
        assert_eq!(normalize("10÷2"), "10/2");
        assert_eq!(normalize("1 + 2 x 3"), "1+2*3");
    }

    #[test]
    fn test_uppercase_x_is_not_multiplication() {
        // Upper-casing happens after the `x` substitution.
        assert_eq!(normalize("7X8"), "7X8");
    }

    #[test]
    fn test_decimal_operand_is_not_scaled() {
        assert_eq!(normalize("1.2K"), "1.2000");
    }
}
