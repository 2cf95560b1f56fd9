//! Line-oriented calculator session.
//!
//! Stands in for the calculator window in a terminal: each line is either
//! an expression appended to the buffer or a keypad command.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::calculator::{Calculator, Key, copy_result, looks_like_expression};

const HELP: &str = "Type an expression (e.g. 3K x 2) to append it to the buffer.\n\
Commands: = (equals), sq (square), sqrt (square root), back, clear, quit";

/// Drive a [`Calculator`] from `input`, echoing the buffer to `output`
/// after every line. Stops at end of input or on `quit`.
pub fn run_session<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: R,
    mut output: W,
    copy_results: bool,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match Key::parse(trimmed) {
            Some(key @ Key::Operation(_)) => {
                calculator.press(key);
                if copy_results
                    && let Some(result) = calculator.last_result()
                    && let Err(e) = copy_result(result)
                {
                    warn!("{}", e);
                }
            }
            Some(Key::Input(_)) | None if looks_like_expression(trimmed) => {
                calculator.append(trimmed);
            }
            Some(key) => {
                calculator.press(key);
            }
            None => {
                writeln!(output, "Unknown command: {}", trimmed)?;
                continue;
            }
        }

        writeln!(output, "{}", calculator.buffer())?;
    }

    Ok(())
}
