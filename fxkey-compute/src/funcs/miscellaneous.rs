//! Functions that don't belong to any particular family.

/// The absolute value of `n`.
pub fn abs(n: f64) -> f64 {
    n.abs()
}
