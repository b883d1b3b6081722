//! Whitelist-restricted numeric evaluation of coefficient expressions.
//!
//! The entry point is [`evaluate`], which normalizes the LaTeX-like notation, parses the
//! result, evaluates the tree against the [`funcs`](crate::funcs) whitelist, and rejects
//! anything that does not come out as a finite number.
//!
//! This engine is deliberately decoupled from the rewrite engine in `fxkey-encode`: both parse
//! the same notation family, but this one destroys the symbols to obtain a verification
//! scalar, while the rewrite engine preserves them as calculator keystrokes. The two must not
//! share rule tables or output alphabets.

pub mod error;
pub mod eval;

pub use eval::Eval;

use error::NonFiniteResult;
use fxkey_error::Error;
use fxkey_parser::{latex, parser::Parser};

/// A failed evaluation: the diagnostic, plus the normalized source text its spans point into.
///
/// Normalization rewrites the input before parsing (`\frac{1}{2}` becomes `(1)/(2)`), so spans
/// index the normalized text, not the original cell contents. The normalized text is carried
/// here so callers can render the report without re-running normalization.
#[derive(Debug)]
pub struct EvaluationError {
    /// The normalized source text the error occurred in.
    pub normalized: String,

    /// The underlying diagnostic.
    pub error: Error,
}

impl EvaluationError {
    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> std::io::Result<()> {
        self.error.report_to_stderr(src_id, &self.normalized)
    }
}

/// Normalizes, parses and evaluates one coefficient expression to a finite number.
pub fn evaluate(expr: &str) -> Result<f64, EvaluationError> {
    let normalized = latex::normalize(expr);

    let ast = Parser::new(&normalized)
        .parse_expr()
        .map_err(|error| EvaluationError { normalized: normalized.clone(), error })?;

    let value = ast.eval().map_err(|error| EvaluationError {
        normalized: normalized.clone(),
        error,
    })?;

    if !value.is_finite() {
        return Err(EvaluationError {
            error: Error::new(vec![ast.span()], NonFiniteResult),
            normalized,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_absolute_eq_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_float_absolute_eq!(evaluate("3").unwrap(), 3.0, 1e-12);
        assert_float_absolute_eq!(evaluate("-2.5").unwrap(), -2.5, 1e-12);
    }

    #[test]
    fn arithmetic() {
        assert_float_absolute_eq!(evaluate("1/2 + 1/2").unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(evaluate("2^10").unwrap(), 1024.0, 1e-12);
    }

    #[test]
    fn latex_fractions() {
        assert_float_absolute_eq!(evaluate(r"\frac{1}{2}").unwrap(), 0.5, 1e-12);
        assert_float_absolute_eq!(evaluate(r"\frac{\frac{1}{2}}{2}").unwrap(), 0.25, 1e-12);
    }

    #[test]
    fn whitelisted_functions() {
        assert_float_absolute_eq!(evaluate("sqrt(16)").unwrap(), 4.0, 1e-12);
        assert_float_absolute_eq!(evaluate("sin(pi/2)").unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(evaluate("log(1000)").unwrap(), 3.0, 1e-12);
        assert_float_absolute_eq!(evaluate("ln(e)").unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn implicit_multiplication() {
        assert_float_absolute_eq!(evaluate("2pi").unwrap(), std::f64::consts::TAU, 1e-12);
    }

    #[test]
    fn unknown_function_is_rejected() {
        assert!(evaluate("system(1)").is_err());
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(evaluate("x + 1").is_err());
    }

    #[test]
    fn non_finite_results_are_rejected() {
        assert!(evaluate("1/0").is_err());
        assert!(evaluate("sqrt(-1)").is_err());
        assert!(evaluate("ln(0)").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(evaluate("1 +").is_err());
        assert!(evaluate("@#!").is_err());
    }
}
