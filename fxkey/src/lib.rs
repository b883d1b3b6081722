//! Calculator keystroke encoding and numeric verification for coefficient data.
//!
//! This crate ties the pipeline together. One batch of raw coefficient strings flows down two
//! independent branches:
//!
//! - the **encoding branch** ([`encode`], [`assemble_equation_instruction`],
//!   [`assemble_geometry_instruction`]) rewrites each coefficient into calculator keystrokes
//!   and composes them into a complete instruction string;
//! - the **verification branch** ([`evaluate`], [`solve_linear_system`],
//!   [`solve_polynomial`]) evaluates the same coefficients to numbers and solves the
//!   underlying system or equation, so a data-entry mistake surfaces as a wrong or missing
//!   mathematical solution.
//!
//! The two branches share nothing but the input; keystroke tokens are never evaluated and
//! numeric values are never encoded.

pub use fxkey_compute::linear::{self, SolutionReport};
pub use fxkey_compute::numerical::{evaluate, EvaluationError};
pub use fxkey_compute::polynomial::{self, ExactRoots, Root, RootReport};
pub use fxkey_compute::SolveError;
pub use fxkey_encode::{
    assemble_equation_instruction,
    assemble_geometry_instruction,
    encode,
    split_values,
    Dimension,
    GeometryTables,
    GroupSpec,
    Operation,
    RewriteRule,
    RuleKind,
    RuleTable,
    Shape,
    VersionConfig,
    VersionTable,
};
pub use fxkey_error::Error;
pub use fxkey_parser::latex;

/// An ordered list of raw coefficient strings, as entered.
///
/// Completion brings the list to an exact length without ever reordering it: missing entries
/// are filled with the zero token `"0"` at the end, excess entries are dropped from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoefficientVector {
    entries: Vec<String>,
}

impl CoefficientVector {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        Self {
            entries: entries.iter().map(|entry| entry.as_ref().to_string()).collect(),
        }
    }

    /// Completes the vector to exactly `len` entries.
    pub fn completed(mut self, len: usize) -> Self {
        self.entries.resize(len, "0".to_string());
        self
    }

    /// The entries, in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Encodes every entry with the given rule table. Blank entries stay blank rather than
    /// encoding to anything.
    pub fn encode_all(&self, rules: &RuleTable) -> Vec<String> {
        self.entries.iter().map(|entry| encode(entry, rules)).collect()
    }

    /// Evaluates every entry to a number. Blank entries evaluate to `0.0`; anything else must
    /// be a valid coefficient expression.
    pub fn evaluate_all(&self) -> Result<Vec<f64>, PipelineError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.trim().is_empty() {
                    Ok(0.0)
                } else {
                    evaluate(entry).map_err(|source| PipelineError::Evaluation { index, source })
                }
            })
            .collect()
    }
}

/// A failure in the verification branch.
#[derive(Debug)]
pub enum PipelineError {
    /// A coefficient failed to evaluate; `index` is its position in the input.
    Evaluation {
        index: usize,
        source: EvaluationError,
    },

    /// The evaluated coefficients do not form a solvable problem.
    Solve(SolveError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Evaluation { index, .. } => {
                write!(f, "coefficient {} is not a valid expression", index + 1)
            },
            PipelineError::Solve(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Evaluation { .. } => None,
            PipelineError::Solve(error) => Some(error),
        }
    }
}

impl From<SolveError> for PipelineError {
    fn from(error: SolveError) -> Self {
        PipelineError::Solve(error)
    }
}

/// Evaluates the raw coefficients of an `unknowns`-unknown linear system and solves it.
///
/// The input is completed to `unknowns * (unknowns + 1)` entries (row-major, each row ending
/// with its right-hand side) before evaluation.
pub fn solve_linear_system(
    values: &[&str],
    unknowns: usize,
) -> Result<SolutionReport, PipelineError> {
    let coeffs = CoefficientVector::new(values)
        .completed(unknowns * (unknowns + 1))
        .evaluate_all()?;
    Ok(linear::solve(&coeffs, unknowns)?)
}

/// Evaluates the raw coefficients of a degree-`degree` polynomial (highest power first) and
/// solves it.
pub fn solve_polynomial(coeffs: &[&str], degree: usize) -> Result<RootReport, PipelineError> {
    let coeffs = CoefficientVector::new(coeffs)
        .completed(degree + 1)
        .evaluate_all()?;
    Ok(polynomial::solve(&coeffs)?)
}

/// Encodes the raw coefficients of a linear system and assembles the complete calculator
/// instruction for the given model version.
pub fn encode_equation_system(
    values: &[&str],
    unknowns: usize,
    version: &str,
    rules: &RuleTable,
    versions: &VersionTable,
) -> String {
    let tokens = CoefficientVector::new(values)
        .completed(unknowns.saturating_mul(unknowns + 1))
        .encode_all(rules);
    let prefix = versions.equation_prefix(version, unknowns);
    assemble_equation_instruction(unknowns, &prefix, &tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn completion_pads_with_zero_tokens_in_place() {
        let vector = CoefficientVector::new(&["1", "", "3"]).completed(5);
        assert_eq!(vector.entries(), ["1", "", "3", "0", "0"]);
    }

    #[test]
    fn completion_truncates_from_the_end() {
        let vector = CoefficientVector::new(&["1", "2", "3"]).completed(2);
        assert_eq!(vector.entries(), ["1", "2"]);
    }

    #[test]
    fn blank_entries_evaluate_to_zero() {
        let values = CoefficientVector::new(&["2", "", " "]).evaluate_all().unwrap();
        assert_eq!(values, vec![2.0, 0.0, 0.0]);
    }

    #[test]
    fn evaluation_failures_carry_the_entry_index() {
        let error = CoefficientVector::new(&["1", "nope"]).evaluate_all().unwrap_err();
        match error {
            PipelineError::Evaluation { index, .. } => assert_eq!(index, 1),
            other => panic!("expected an evaluation error, got {}", other),
        }
    }
}
