//! Conversions between the display string and numeric operands.

/// Parse the display string into a number.
///
/// The display is always a valid decimal literal (`"0"`, `"-0."`, `"12.5"`),
/// so a failure here means the state was corrupted. Debug builds assert;
/// release builds log and fall back to zero.
pub fn parse_display(text: &str) -> f64 {
    let parsed = text.parse::<f64>();
    debug_assert!(parsed.is_ok(), "display {text:?} is not a decimal literal");

    parsed.unwrap_or_else(|err| {
        tracing::error!(display = text, %err, "display is not a decimal literal, using 0");
        0.0
    })
}

/// Render a computed value as a display string.
///
/// Uses the shortest decimal form that round-trips, without an exponent and
/// without a trailing `.0` for integral values. Negative zero renders as
/// `"0"`. Non-finite values are clamped to `"0"` so they never reach the
/// display.
pub fn number_to_display(value: f64) -> String {
    if !value.is_finite() {
        tracing::warn!(%value, "non-finite result clamped to 0");
        return "0".to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    format!("{}", value)
}
