//! Failure classes produced while evaluating an expression.

use thiserror::Error;

/// Why an expression could not produce a number.
///
/// The `Display` text of each variant is exactly what the calculator shows in
/// place of a result.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Unparseable syntax, an unknown symbol, or a result that is not a number.
    #[error("Invalid Input!")]
    InvalidInput,
    /// Division or modulo by zero.
    #[error("Divide By Zero!")]
    DivideByZero,
    /// A decimal point was entered where only whole numbers are accepted.
    #[error("Decimals invalid")]
    DecimalsInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_strings() {
        assert_eq!(CalcError::InvalidInput.to_string(), "Invalid Input!");
        assert_eq!(CalcError::DivideByZero.to_string(), "Divide By Zero!");
        assert_eq!(CalcError::DecimalsInvalid.to_string(), "Decimals invalid");
    }
}
