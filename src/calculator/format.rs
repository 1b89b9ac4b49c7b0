//! Number formatting for the calculator display.

/// Format a result for the display.
///
/// Uses the shortest decimal that round-trips to the same `f64`. Integral
/// values keep a `.0` suffix so a computed result is distinguishable from
/// typed digits, and magnitudes outside `1e-4..1e16` switch to exponent
/// notation. Every output of this function parses back with
/// [`parse_number`].
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Parse display text back into a number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
