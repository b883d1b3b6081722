//! Gauss-Jordan solving of small linear systems.
//!
//! Systems of 2–4 unknowns arrive as a flat, row-major coefficient slice of `n` equations with
//! `n + 1` terms each, the last term per row being the right-hand side. The solver classifies
//! the system rather than failing on it: inconsistent and underdetermined systems are
//! first-class [`SolutionReport`] outcomes, not errors.

use crate::consts::{RESIDUAL_TOLERANCE, SOLUTION_DECIMALS, TOLERANCE};
use crate::error::SolveError;
use crate::fmt::{format_sig, round_to, SUBSCRIPTS};

/// The augmented matrix of a linear system: `unknowns` rows of `unknowns + 1` columns.
///
/// Solving copies the matrix on entry; the caller's rows are never mutated, so the original
/// equations remain available for the residual check afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    rows: Vec<Vec<f64>>,
    unknowns: usize,
}

impl AugmentedMatrix {
    /// Builds the augmented matrix from a flat row-major coefficient slice. The slice must
    /// hold exactly `unknowns * (unknowns + 1)` entries.
    pub fn from_coefficients(coeffs: &[f64], unknowns: usize) -> Result<Self, SolveError> {
        if !(2..=4).contains(&unknowns) {
            return Err(SolveError::UnsupportedUnknownCount(unknowns));
        }

        let expected = unknowns * (unknowns + 1);
        if coeffs.len() != expected {
            return Err(SolveError::WrongCoefficientCount {
                expected,
                given: coeffs.len(),
            });
        }

        let rows = coeffs
            .chunks(unknowns + 1)
            .map(|row| row.to_vec())
            .collect();

        Ok(Self { rows, unknowns })
    }

    /// The number of unknowns in the system.
    pub fn unknowns(&self) -> usize {
        self.unknowns
    }

    /// Solves the system with Gauss-Jordan elimination and partial pivoting, classifying the
    /// outcome.
    pub fn solve(&self) -> SolutionReport {
        let n = self.unknowns;
        let mut mat = self.rows.clone();

        for i in 0..n {
            // partial pivoting: bring the remaining row with the largest pivot-column
            // magnitude into place
            let mut max_row = i;
            for k in i + 1..n {
                if mat[k][i].abs() > mat[max_row][i].abs() {
                    max_row = k;
                }
            }
            mat.swap(i, max_row);

            if mat[i][i].abs() < TOLERANCE {
                return if mat[i][n].abs() > TOLERANCE {
                    SolutionReport::Inconsistent
                } else {
                    SolutionReport::Underdetermined
                };
            }

            let pivot = mat[i][i];
            for j in i..=n {
                mat[i][j] /= pivot;
            }

            for k in 0..n {
                if k != i && mat[k][i].abs() > TOLERANCE {
                    let factor = mat[k][i];
                    for j in i..=n {
                        mat[k][j] -= factor * mat[i][j];
                    }
                }
            }
        }

        let values: Vec<f64> = (0..n)
            .map(|i| {
                let rounded = round_to(mat[i][n], SOLUTION_DECIMALS);
                if rounded.abs() < TOLERANCE { 0.0 } else { rounded }
            })
            .collect();

        // check the solution against the original equations, not the eliminated ones
        let mut max_residual = 0.0f64;
        for row in &self.rows {
            let lhs: f64 = (0..n).map(|j| row[j] * values[j]).sum();
            max_residual = max_residual.max((lhs - row[n]).abs());
        }

        let solution = Solution {
            approximate: max_residual > RESIDUAL_TOLERANCE,
            max_residual,
            values,
        };

        if solution.values.iter().all(|value| value.abs() < TOLERANCE) {
            SolutionReport::Trivial(solution)
        } else {
            SolutionReport::Unique(solution)
        }
    }
}

/// A solution vector and how well it satisfies the original equations.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The value of each unknown, in order.
    pub values: Vec<f64>,

    /// Whether the maximum residual exceeded [`RESIDUAL_TOLERANCE`]. An approximate solution
    /// is still a solution; the flag distinguishes numerically-noisy answers from wrong ones.
    pub approximate: bool,

    /// The largest absolute residual the solution leaves in the original equations.
    pub max_residual: f64,
}

/// The classified outcome of solving a linear system.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionReport {
    /// The system has exactly one solution.
    Unique(Solution),

    /// The system has exactly one solution, and it is the all-zero vector.
    Trivial(Solution),

    /// The system has infinitely many solutions.
    Underdetermined,

    /// The system has no solution.
    Inconsistent,
}

impl SolutionReport {
    /// Returns the solution vector, if the system had a unique (possibly trivial) solution.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolutionReport::Unique(solution) | SolutionReport::Trivial(solution) => {
                Some(solution)
            },
            _ => None,
        }
    }
}

impl std::fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionReport::Unique(solution) => {
                if solution.approximate {
                    writeln!(
                        f,
                        "approximate solution (max residual: {:.2e})",
                        solution.max_residual,
                    )?;
                }

                let unknowns = solution.values.len();
                let rendered: Vec<String> = solution
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        format!("{} = {}", unknown_symbol(i, unknowns), format_sig(*value, 6))
                    })
                    .collect();
                write!(f, "{}", rendered.join(", "))
            },
            SolutionReport::Trivial(_) => write!(f, "trivial solution: all unknowns are 0"),
            SolutionReport::Underdetermined => {
                write!(f, "the system has infinitely many solutions")
            },
            SolutionReport::Inconsistent => write!(f, "the system has no solution"),
        }
    }
}

/// The display symbol for the `index`-th unknown: `x, y` for two unknowns, `x, y, z` for
/// three, and the indexed `x₁..x₄` for four.
fn unknown_symbol(index: usize, unknowns: usize) -> String {
    match (unknowns, index) {
        (2 | 3, 0) => "x".to_string(),
        (2 | 3, 1) => "y".to_string(),
        (3, 2) => "z".to_string(),
        _ => format!("x{}", SUBSCRIPTS[index]),
    }
}

/// Solves the linear system described by the flat row-major coefficient slice.
pub fn solve(coeffs: &[f64], unknowns: usize) -> Result<SolutionReport, SolveError> {
    Ok(AugmentedMatrix::from_coefficients(coeffs, unknowns)?.solve())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Unwraps a unique solution, panicking on any other classification.
    fn unique(report: SolutionReport) -> Solution {
        match report {
            SolutionReport::Unique(solution) => solution,
            other => panic!("expected a unique solution, got {:?}", other),
        }
    }

    #[test]
    fn two_unknowns() {
        // x + y = 2, x - y = 0
        let report = solve(&[1.0, 1.0, 2.0, 1.0, -1.0, 0.0], 2).unwrap();
        let solution = unique(report);
        assert_eq!(solution.values, vec![1.0, 1.0]);
        assert!(!solution.approximate);
    }

    #[test]
    fn three_unknowns() {
        // x = 1, y = 2, z = 3 by construction
        let coeffs = [
            1.0, 1.0, 1.0, 6.0,
            1.0, -1.0, 0.0, -1.0,
            0.0, 1.0, -1.0, -1.0,
        ];
        let solution = unique(solve(&coeffs, 3).unwrap());
        assert_eq!(solution.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn underdetermined_system() {
        // the second equation is twice the first
        let report = solve(&[1.0, 1.0, 2.0, 2.0, 2.0, 4.0], 2).unwrap();
        assert_eq!(report, SolutionReport::Underdetermined);
    }

    #[test]
    fn inconsistent_system() {
        // parallel lines
        let report = solve(&[1.0, 1.0, 2.0, 1.0, 1.0, 3.0], 2).unwrap();
        assert_eq!(report, SolutionReport::Inconsistent);
    }

    #[test]
    fn trivial_solution() {
        let report = solve(&[1.0, 1.0, 0.0, 1.0, -1.0, 0.0], 2).unwrap();
        assert!(matches!(report, SolutionReport::Trivial(_)));
    }

    #[test]
    fn row_permutation_does_not_change_the_solution() {
        let rows: [&[f64]; 3] = [
            &[2.0, 1.0, -1.0, 8.0],
            &[-3.0, -1.0, 2.0, -11.0],
            &[-2.0, 1.0, 2.0, -3.0],
        ];
        let permutations: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];

        let mut solutions = Vec::new();
        for permutation in permutations {
            let coeffs: Vec<f64> = permutation
                .iter()
                .flat_map(|&i| rows[i].iter().copied())
                .collect();
            solutions.push(unique(solve(&coeffs, 3).unwrap()).values);
        }

        for solution in &solutions[1..] {
            for (a, b) in solution.iter().zip(&solutions[0]) {
                assert!((a - b).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn pivoting_handles_zero_leading_entry() {
        // 0x + y = 1, x + 0y = 2 requires a row swap before elimination
        let solution = unique(solve(&[0.0, 1.0, 1.0, 1.0, 0.0, 2.0], 2).unwrap());
        assert_eq!(solution.values, vec![2.0, 1.0]);
    }

    #[test]
    fn four_unknowns_use_indexed_symbols() {
        let coeffs = [
            1.0, 0.0, 0.0, 0.0, 1.0,
            0.0, 1.0, 0.0, 0.0, 2.0,
            0.0, 0.0, 1.0, 0.0, 3.0,
            0.0, 0.0, 0.0, 1.0, 4.0,
        ];
        let report = solve(&coeffs, 4).unwrap();
        assert_eq!(report.to_string(), "x₁ = 1, x₂ = 2, x₃ = 3, x₄ = 4");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            solve(&[1.0, 2.0], 2),
            Err(SolveError::WrongCoefficientCount { expected: 6, given: 2 }),
        );
        assert_eq!(solve(&[], 5), Err(SolveError::UnsupportedUnknownCount(5)));
    }
}
