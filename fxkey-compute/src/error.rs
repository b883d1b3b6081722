//! Structural solver errors.
//!
//! These carry no source spans: they describe problems with the shape of the coefficient data
//! (arity, degenerate leading coefficient), not with any particular piece of user text.
//! Per-coefficient evaluation problems are reported through
//! [`EvaluationError`](crate::numerical::EvaluationError) instead.

use std::fmt;

/// An error that prevents a solve from producing any result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The leading coefficient of a polynomial is zero, so the equation is not of the claimed
    /// degree.
    ZeroLeadingCoefficient,

    /// The polynomial degree is outside the supported range of 2–4.
    UnsupportedDegree(usize),

    /// The number of unknowns is outside the supported range of 2–4.
    UnsupportedUnknownCount(usize),

    /// The coefficient slice has the wrong number of entries.
    WrongCoefficientCount {
        /// The number of coefficients required.
        expected: usize,

        /// The number of coefficients given.
        given: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::ZeroLeadingCoefficient => {
                write!(f, "the leading coefficient must not be zero")
            },
            SolveError::UnsupportedDegree(degree) => {
                write!(f, "degree {} is not supported (only degrees 2 through 4 are)", degree)
            },
            SolveError::UnsupportedUnknownCount(unknowns) => {
                write!(f, "{} unknowns are not supported (only 2 through 4 are)", unknowns)
            },
            SolveError::WrongCoefficientCount { expected, given } => {
                write!(f, "expected {} coefficients, got {}", expected, given)
            },
        }
    }
}

impl std::error::Error for SolveError {}
