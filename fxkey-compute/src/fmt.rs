//! Number and symbol formatting shared by the solver reports.

/// Unicode subscript digits for the indexed unknowns `x₁` through `x₄`.
pub const SUBSCRIPTS: [&str; 4] = ["₁", "₂", "₃", "₄"];

/// Power notation for polynomial terms, indexed by exponent.
pub const POWERS: [&str; 5] = ["", "x", "x²", "x³", "x⁴"];

/// Rounds a value to the given number of decimal digits.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Formats a value with at most `sig` significant digits and no trailing zeros, in the manner
/// of C's `%g` but without ever switching to scientific notation.
pub fn format_sig(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig as i32 - 1 - magnitude).clamp(0, 17) as usize;
    let mut formatted = format!("{:.*}", decimals, value);

    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }

    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
