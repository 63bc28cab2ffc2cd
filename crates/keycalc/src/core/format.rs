//! Result formatting
//!
//! Results are rendered with `f64`'s `Display`, which never switches to
//! exponent notation. The text can therefore be stored back into the
//! expression for chaining.

/// Digits kept after the decimal point for non-integer results
pub const DEFAULT_FRACTION_DIGITS: usize = 12;

/// Formats a finite result for display.
///
/// Integers print without a fraction. Other values are rounded to
/// `fraction_digits` decimal places and re-parsed, so trailing zeros and
/// float noise disappear (`0.1+0.2` prints `0.3`).
#[must_use]
pub fn format_result(value: f64, fraction_digits: usize) -> String {
    if value.fract() == 0.0 {
        return integer_text(value);
    }

    let rounded = format!("{value:.fraction_digits$}");
    let reparsed: f64 = rounded.parse().unwrap_or(value);
    if reparsed.fract() == 0.0 {
        integer_text(reparsed)
    } else {
        reparsed.to_string()
    }
}

// -0 prints as "0"
fn integer_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
