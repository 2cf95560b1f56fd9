//! Big-number calculator.
//!
//! This module provides functionality to:
//! - Normalize keypad input (symbols and K/M/G/T/P/E shorthand)
//! - Evaluate arithmetic expressions
//! - Format results back into shorthand
//! - Keep the input buffer of one calculator window
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod error;
mod evaluation;
mod format;
mod keypad;
mod normalize;
mod parser;

pub use clipboard::{copy_result, copy_to_clipboard};
pub use engine::Calculator;
pub use error::CalcError;
pub use evaluation::{CalcResult, Operation, evaluate, evaluate_strict, run};
pub use format::{format_magnitude, format_plain};
pub use keypad::{Key, looks_like_expression};
pub use normalize::{UNITS, normalize};
