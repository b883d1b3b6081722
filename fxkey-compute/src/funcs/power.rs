//! Root, exponential and logarithmic functions.
//!
//! `log` is base 10 and `ln` is natural, matching the convention printed on the target
//! calculators' keypads.

/// The square root of `n`. Negative inputs produce NaN, which the evaluator rejects as a
/// non-finite result.
pub fn sqrt(n: f64) -> f64 {
    n.sqrt()
}

/// `e` raised to the power `n`.
pub fn exp(n: f64) -> f64 {
    n.exp()
}

/// The base-10 logarithm of `n`.
pub fn log(n: f64) -> f64 {
    n.log10()
}

/// The natural logarithm of `n`.
pub fn ln(n: f64) -> f64 {
    n.ln()
}
