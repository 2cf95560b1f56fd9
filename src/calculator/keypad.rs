//! Calculator keypad.
//!
//! Maps button labels to [`Key`]s and recognizes lines of text made up
//! entirely of keypad characters.

use lazy_static::lazy_static;
use regex::Regex;

use super::evaluation::Operation;

lazy_static! {
    /// Matches strings containing only characters the keypad can produce.
    /// Allows: digits, whitespace, operators, parentheses, dots, unit letters.
    static ref KEYPAD_CHARS: Regex = Regex::new(
        r"^[\d\s\.\+\-x÷%()KMGTPEkmgtpe]+$"
    ).unwrap();
}

/// A single calculator button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A token appended to the input buffer (digit, operator, unit, ...).
    Input(String),
    /// Delete the last character.
    Backspace,
    /// Empty the input buffer.
    Clear,
    /// Run an operation on the buffer.
    Operation(Operation),
}

impl Key {
    /// Parse a button label.
    ///
    /// Returns `None` for labels that are neither a command nor a single
    /// keypad character.
    pub fn parse(label: &str) -> Option<Self> {
        let key = match label.trim() {
            "=" => Self::Operation(Operation::Equals),
            "x²" | "sq" => Self::Operation(Operation::Square),
            "√" | "sqrt" => Self::Operation(Operation::SquareRoot),
            "C" | "clear" => Self::Clear,
            "⌫" | "back" => Self::Backspace,
            "*" => Self::Input("x".to_string()),
            "/" => Self::Input("÷".to_string()),
            token if token.chars().count() == 1 && looks_like_expression(token) => {
                Self::Input(token.to_string())
            }
            _ => return None,
        };
        Some(key)
    }
}

/// Check if a line consists only of keypad characters.
pub fn looks_like_expression(input: &str) -> bool {
    !input.trim().is_empty() && KEYPAD_CHARS.is_match(input)
}
