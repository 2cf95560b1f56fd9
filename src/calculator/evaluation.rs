//! Expression evaluation.
//!
//! Composes normalization, parsing and formatting into the three calculator
//! operations and wraps the outcome in a [`CalcResult`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CalcError;
use super::format::{format_magnitude, format_plain};
use super::normalize::normalize;
use super::parser::eval_arithmetic;

/// An action that turns the input buffer into a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Evaluate the expression. Decimal points are rejected.
    #[default]
    Equals,
    /// Evaluate the expression and square it.
    Square,
    /// Evaluate the expression and take its square root.
    #[value(name = "sqrt")]
    #[serde(alias = "sqrt")]
    SquareRoot,
}

/// Result of running an operation on a calculator expression.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The raw expression as typed.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted with a unit suffix.
        display_result: String,
        /// Formatted without a unit suffix.
        clipboard_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The raw expression as typed.
        expression: String,
        /// What went wrong.
        #[serde(serialize_with = "serialize_error")]
        error: CalcError,
    },
}

fn serialize_error<S: serde::Serializer>(
    error: &CalcError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl CalcResult {
    fn new(expression: &str, outcome: Result<f64, CalcError>) -> Self {
        let expression = expression.to_string();
        match outcome {
            // -0.0 == 0.0, so this also drops the sign of negative zero.
            Ok(value) if value == 0.0 => Self::new_success(expression, 0.0),
            Ok(value) => Self::new_success(expression, value),
            Err(error) => Self::Error { expression, error },
        }
    }

    fn new_success(expression: String, value: f64) -> Self {
        Self::Success {
            expression,
            display_result: format_magnitude(value),
            clipboard_result: format_plain(value),
            value,
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric value, if evaluation succeeded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The error, if evaluation failed.
    pub fn error(&self) -> Option<CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(*error),
        }
    }

    /// Get the display string (shorthand result or diagnostic message).
    pub fn display(&self) -> String {
        match self {
            Self::Success { display_result, .. } => display_result.clone(),
            Self::Error { error, .. } => error.to_string(),
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate a normalized expression.
pub fn evaluate(normalized: &str) -> Result<f64, CalcError> {
    let outcome = eval_arithmetic(normalized);
    if let Err(error) = &outcome {
        debug!(normalized, %error, "evaluation failed");
    }
    outcome
}

/// Evaluate a normalized expression, rejecting decimal points first.
pub fn evaluate_strict(normalized: &str) -> Result<f64, CalcError> {
    if normalized.contains('.') {
        debug!(normalized, "decimal point rejected");
        return Err(CalcError::DecimalsInvalid);
    }
    evaluate(normalized)
}

/// Run an operation on raw calculator input.
///
/// Only [`Operation::Equals`] rejects decimal points; squaring and square
/// roots accept them.
pub fn run(operation: Operation, raw: &str) -> CalcResult {
    let normalized = normalize(raw);

    let outcome = match operation {
        Operation::Equals => evaluate_strict(&normalized),
        Operation::Square => evaluate(&normalized).and_then(|v| finite(v * v)),
        Operation::SquareRoot => evaluate(&normalized).and_then(|v| {
            if v < 0.0 {
                Err(CalcError::InvalidInput)
            } else {
                Ok(v.sqrt())
            }
        }),
    };

    CalcResult::new(raw, outcome)
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let result = run(Operation::Equals, "7x8");
        assert!(result.is_success());
        assert_eq!(result.display(), "56 ");
        assert_eq!(result.clipboard(), Some("56"));
        assert_eq!(result.expression(), "7x8");
    }

    #[test]
    fn test_shorthand_round_trip() {
        let result = run(Operation::Equals, "3K x 500");
        assert_eq!(result.display(), "1.5 M");
        assert_eq!(result.clipboard(), Some("1500000"));
        assert_eq!(result.value(), Some(1_500_000.0));
    }

    #[test]
    fn test_equals_rejects_decimals() {
        let result = run(Operation::Equals, "1.5+2");
        assert_eq!(result.error(), Some(CalcError::DecimalsInvalid));
        assert_eq!(result.display(), "Decimals invalid");
        assert_eq!(result.clipboard(), None);
    }

    #[test]
    fn test_decimal_check_runs_before_parsing() {
        assert_eq!(evaluate_strict("1.+"), Err(CalcError::DecimalsInvalid));
    }

    #[test]
    fn test_square_accepts_decimals() {
        assert_eq!(run(Operation::Square, "4").display(), "16 ");
        assert_eq!(run(Operation::Square, "2.5").display(), "6.25 ");
        assert_eq!(run(Operation::Square, "2K").display(), "4 M");
    }

    #[test]
    fn test_square_root() {
        assert_eq!(run(Operation::SquareRoot, "9").display(), "3 ");
        assert_eq!(run(Operation::SquareRoot, "6.25").display(), "2.5 ");
        assert_eq!(run(Operation::SquareRoot, "4M").display(), "2 K");
    }

    #[test]
    fn test_square_root_of_negative() {
        let result = run(Operation::SquareRoot, "0-9");
        assert_eq!(result.error(), Some(CalcError::InvalidInput));
    }

    #[test]
    fn test_errors_propagate_through_square() {
        assert_eq!(run(Operation::Square, "1÷0").display(), "Divide By Zero!");
        assert_eq!(run(Operation::SquareRoot, "2+").display(), "Invalid Input!");
    }

    #[test]
    fn test_zero_results_are_unsigned() {
        let result = run(Operation::Equals, "0x-5");
        assert_eq!(result.display(), "0 ");
        assert_eq!(result.clipboard(), Some("0"));
        assert!(result.value().is_some_and(|v| v.is_sign_positive()));

        assert_eq!(run(Operation::SquareRoot, "-0").display(), "0 ");
        assert_eq!(run(Operation::Square, "-0").display(), "0 ");
    }

    #[test]
    fn test_square_overflow_is_invalid() {
        let result = run(Operation::Square, &format!("1{}", "0".repeat(300)));
        assert_eq!(result.error(), Some(CalcError::InvalidInput));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(run(Operation::Equals, "10÷0")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Divide By Zero!");

        let json = serde_json::to_value(run(Operation::Equals, "2K")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["display_result"], "2 K");
    }
}
