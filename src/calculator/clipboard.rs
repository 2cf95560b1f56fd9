//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

use super::evaluation::CalcResult;

/// Copy text to the system clipboard.
///
/// Returns `Ok(())` on success, or an error message on failure.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy to clipboard: {}", e))
}

/// Copy a result to the clipboard.
///
/// Successful results are copied as a plain number without a unit suffix.
/// Errors copy their diagnostic so the message can still be pasted.
pub fn copy_result(result: &CalcResult) -> Result<(), String> {
    match result.clipboard() {
        Some(text) => copy_to_clipboard(text),
        None => copy_to_clipboard(&result.display()),
    }
}
