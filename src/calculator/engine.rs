//! Calculator state.
//!
//! A [`Calculator`] owns the input buffer of one calculator window. Create
//! one when the window opens and drop it when the window closes.

use tracing::debug;

use super::evaluation::{CalcResult, Operation, run};
use super::keypad::Key;

/// Input buffer plus the most recent result.
#[derive(Debug, Default)]
pub struct Calculator {
    buffer: String,
    last_result: Option<CalcResult>,
}

impl Calculator {
    /// Create a calculator with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The result of the last operation, if any has run.
    pub fn last_result(&self) -> Option<&CalcResult> {
        self.last_result.as_ref()
    }

    /// Append a token to the buffer.
    pub fn append(&mut self, token: &str) -> &str {
        self.buffer.push_str(token);
        &self.buffer
    }

    /// Delete the last character of the buffer.
    pub fn backspace(&mut self) -> &str {
        self.buffer.pop();
        &self.buffer
    }

    /// Empty the buffer.
    pub fn clear(&mut self) -> &str {
        self.buffer.clear();
        &self.buffer
    }

    /// Evaluate the buffer, rejecting decimal points.
    pub fn equals(&mut self) -> String {
        self.apply(Operation::Equals)
    }

    /// Evaluate the buffer and square it.
    pub fn square(&mut self) -> String {
        self.apply(Operation::Square)
    }

    /// Evaluate the buffer and take its square root.
    pub fn square_root(&mut self) -> String {
        self.apply(Operation::SquareRoot)
    }

    /// Run an operation on the buffer.
    ///
    /// The buffer is replaced by the display string, whether that is a
    /// result or a diagnostic, and stays editable afterwards.
    pub fn apply(&mut self, operation: Operation) -> String {
        let result = run(operation, &self.buffer);
        let shown = result.display();
        debug!(?operation, expression = %self.buffer, result = %shown, "applied operation");

        self.buffer = shown.clone();
        self.last_result = Some(result);
        shown
    }

    /// Handle a button press and return the new buffer contents.
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Input(token) => self.append(&token),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            Key::Operation(operation) => {
                self.apply(operation);
                &self.buffer
            }
        }
    }
}
