//! Display item describing what a calculator window shows.

use crate::calculator::CalculatorState;
use serde::Serialize;

/// A snapshot of the calculator for a front-end to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayItem {
    /// The display text, possibly the error sentinel.
    pub display: String,
    /// Symbol of the operator waiting for its second operand.
    pub pending: Option<String>,
    /// Whether the display holds the error sentinel.
    pub is_error: bool,
}

impl DisplayItem {
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            display: state.display().to_string(),
            pending: state.pending_operator().map(|op| op.symbol().to_string()),
            is_error: state.is_error(),
        }
    }

    /// Get the text to copy to the clipboard.
    /// Errors are copied as shown so the user still gets what they see.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display
    }
}

impl From<&CalculatorState> for DisplayItem {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}
