//! Trigonometric functions. All inputs are radians.

/// The sine of `n`.
pub fn sin(n: f64) -> f64 {
    n.sin()
}

/// The cosine of `n`.
pub fn cos(n: f64) -> f64 {
    n.cos()
}

/// The tangent of `n`.
pub fn tan(n: f64) -> f64 {
    n.tan()
}
