//! Text rendering of the calculator display and keypad.
//!
//! The display is a boxed line with the pending operator on the left and the
//! value right-aligned, the same arrangement as the calculator window.

use crate::calculator::KEYPAD;
use crate::items::DisplayItem;

/// Narrowest display that still fits the operator, a gap and one digit.
const MIN_WIDTH: usize = 5;

/// Shown in place of the leading characters of a value that does not fit.
const OVERFLOW_MARKER: char = '<';

/// Width of one keypad button, brackets excluded.
const BUTTON_WIDTH: usize = 4;

/// Render the display box, `width` columns between the borders.
///
/// Values too long for the box keep their rightmost characters behind an
/// overflow marker, so a cut-off `-123456789` never reads as `6789`.
pub fn render_display(item: &DisplayItem, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let border = format!("+{}+", "-".repeat(width));

    let operator = item.pending.as_deref().unwrap_or(" ");
    // One column for the operator, one for the gap and one per side padding.
    let room = width - 4;
    let len = item.display.chars().count();
    let text: String = if len <= room {
        item.display.clone()
    } else {
        let tail = item.display.chars().skip(len - (room - 1));
        std::iter::once(OVERFLOW_MARKER).chain(tail).collect()
    };

    format!("{border}\n| {operator} {text:>room$} |\n{border}")
}

/// Render the keypad button grid, one row per line.
pub fn render_keypad() -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| format!("[{label:^width$}]", width = BUTTON_WIDTH))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
