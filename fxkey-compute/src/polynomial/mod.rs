//! Root-finding for polynomials of degree 2 through 4.
//!
//! Quadratics are solved directly by the closed form, together with a vertex analysis of the
//! parabola. Cubics and quartics are delegated to an [`ExactRoots`] collaborator, which
//! defaults to the Cardano/Ferrari [`ClosedForm`]; a collaborator that can only express a root
//! symbolically yields [`Root::Unresolved`] rather than a fabricated number.

pub mod exact;

pub use exact::{ClosedForm, ExactRoot, ExactRoots};

use num_complex::Complex64;

use crate::consts::{DEFAULT_ROOT_PRECISION, TOLERANCE};
use crate::error::SolveError;
use crate::fmt::{format_sig, POWERS, SUBSCRIPTS};

/// One root of a polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    /// A real root.
    Real(f64),

    /// A root with a non-negligible imaginary part.
    Complex(Complex64),

    /// A root the extractor could only express as text.
    Unresolved(String),
}

impl Root {
    /// Renders the root to `precision` significant digits.
    ///
    /// [`Root::Unresolved`] carries its own textual form and ignores the precision.
    pub fn format(&self, precision: usize) -> String {
        match self {
            Root::Real(value) => format_sig(*value, precision),
            Root::Complex(value) => {
                let imag = match format_sig(value.im.abs(), precision).as_str() {
                    "1" => "i".to_string(),
                    other => format!("{other}i"),
                };
                let sign = if value.im < 0.0 { "-" } else { "+" };

                if format_sig(value.re, precision) == "0" {
                    match sign {
                        "-" => format!("-{imag}"),
                        _ => imag,
                    }
                } else {
                    format!("{} {} {}", format_sig(value.re, precision), sign, imag)
                }
            },
            Root::Unresolved(text) => text.clone(),
        }
    }
}

/// The vertex analysis of a quadratic's parabola.
#[derive(Debug, Clone, PartialEq)]
pub struct ParabolaAnalysis {
    /// The vertex `(-b / 2a, c - b^2 / 4a)`.
    pub vertex: (f64, f64),

    /// The discriminant `b^2 - 4ac`.
    pub discriminant: f64,

    /// Whether the parabola opens upward (`a > 0`).
    pub opens_upward: bool,
}

impl ParabolaAnalysis {
    /// The x-coordinate of the axis of symmetry.
    pub fn axis_of_symmetry(&self) -> f64 {
        self.vertex.0
    }
}

/// The roots of one polynomial, plus the parabola analysis when the degree is 2.
#[derive(Debug, Clone, PartialEq)]
pub struct RootReport {
    coefficients: Vec<f64>,

    /// The roots, with multiplicity; always exactly `degree` of them.
    pub roots: Vec<Root>,

    /// The vertex analysis, present only for quadratics.
    pub parabola: Option<ParabolaAnalysis>,
}

impl RootReport {
    /// The degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Renders the polynomial as an equation, such as `x² - 5x + 6 = 0`.
    pub fn equation(&self) -> String {
        let degree = self.degree();
        let mut out = String::new();

        for (i, &coeff) in self.coefficients.iter().enumerate() {
            let power = degree - i;
            if coeff == 0.0 && !(power == 0 && out.is_empty()) {
                continue;
            }

            let magnitude = format_sig(coeff.abs(), DEFAULT_ROOT_PRECISION);
            if out.is_empty() {
                if coeff < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(if coeff < 0.0 { " - " } else { " + " });
            }

            // the unit coefficient is implied for every term but the constant
            if magnitude != "1" || power == 0 {
                out.push_str(&magnitude);
            }
            out.push_str(POWERS[power]);
        }

        out.push_str(" = 0");
        out
    }

    /// Renders each root to `precision` significant digits, in extraction order.
    pub fn format_roots(&self, precision: usize) -> Vec<String> {
        self.roots.iter().map(|root| root.format(precision)).collect()
    }

    /// The number of real roots.
    pub fn real_count(&self) -> usize {
        self.roots.iter().filter(|root| matches!(root, Root::Real(_))).count()
    }

    /// The number of roots with a non-negligible imaginary part.
    pub fn complex_count(&self) -> usize {
        self.roots.iter().filter(|root| matches!(root, Root::Complex(_))).count()
    }

    /// The number of roots the extractor left unresolved.
    pub fn unresolved_count(&self) -> usize {
        self.roots
            .iter()
            .filter(|root| matches!(root, Root::Unresolved(_)))
            .count()
    }

    /// A human-readable label for the root set, such as `three real roots` or `one real root
    /// and one conjugate pair`.
    pub fn classification(&self) -> String {
        let unresolved = self.unresolved_count();
        if unresolved > 0 {
            return format!("{} of {} roots unresolved", unresolved, self.roots.len());
        }

        let real = self.real_count();
        let pairs = self.complex_count() / 2;
        let real_part = match real {
            0 => None,
            1 => Some("one real root".to_string()),
            n => Some(format!("{} real roots", count_word(n))),
        };
        let pair_part = match pairs {
            0 => None,
            1 => Some("one conjugate pair".to_string()),
            n => Some(format!("{} conjugate pairs", count_word(n))),
        };

        match (real_part, pair_part) {
            (Some(real), Some(pairs)) => format!("{real} and {pairs}"),
            (Some(real), None) => real,
            (None, Some(pairs)) => pairs,
            (None, None) => "no roots".to_string(),
        }
    }
}

/// The spelled-out form of a small count.
fn count_word(n: usize) -> String {
    match n {
        2 => "two".to_string(),
        3 => "three".to_string(),
        4 => "four".to_string(),
        other => other.to_string(),
    }
}

impl std::fmt::Display for RootReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.equation())?;

        let rendered: Vec<String> = self
            .format_roots(DEFAULT_ROOT_PRECISION)
            .into_iter()
            .enumerate()
            .map(|(i, root)| format!("x{} = {}", SUBSCRIPTS[i], root))
            .collect();
        write!(f, "{}", rendered.join(", "))?;

        if let Some(parabola) = &self.parabola {
            write!(
                f,
                "\nvertex: ({}, {}), opens {}",
                format_sig(parabola.vertex.0, DEFAULT_ROOT_PRECISION),
                format_sig(parabola.vertex.1, DEFAULT_ROOT_PRECISION),
                if parabola.opens_upward { "upward" } else { "downward" },
            )?;
        }

        Ok(())
    }
}

/// Converts a collaborator root into a report root, snapping near-real numbers onto the real
/// axis.
fn classify(root: ExactRoot) -> Root {
    match root {
        ExactRoot::Numeric(value) => {
            if value.im.abs() < TOLERANCE {
                Root::Real(value.re)
            } else {
                Root::Complex(value)
            }
        },
        ExactRoot::Symbolic(text) => Root::Unresolved(text),
    }
}

/// The roots of the quadratic `a x^2 + b x + c` along with its vertex analysis.
fn quadratic(a: f64, b: f64, c: f64) -> (Vec<Root>, ParabolaAnalysis) {
    let discriminant = b * b - 4.0 * a * c;
    let parabola = ParabolaAnalysis {
        vertex: (-b / (2.0 * a), c - b * b / (4.0 * a)),
        discriminant,
        opens_upward: a > 0.0,
    };

    let roots = if discriminant.abs() < TOLERANCE {
        vec![Root::Real(-b / (2.0 * a)); 2]
    } else if discriminant > 0.0 {
        let sqrt_disc = discriminant.sqrt();
        vec![
            Root::Real((-b + sqrt_disc) / (2.0 * a)),
            Root::Real((-b - sqrt_disc) / (2.0 * a)),
        ]
    } else {
        let re = -b / (2.0 * a);
        let im = (-discriminant).sqrt() / (2.0 * a).abs();
        vec![
            Root::Complex(Complex64::new(re, im)),
            Root::Complex(Complex64::new(re, -im)),
        ]
    };

    (roots, parabola)
}

/// Solves the polynomial given by `coeffs`, ordered from the highest power down, using the
/// given exact-root collaborator for degrees 3 and 4.
pub fn solve_with(
    coeffs: &[f64],
    extractor: &dyn ExactRoots,
) -> Result<RootReport, SolveError> {
    let degree = coeffs.len().saturating_sub(1);
    if !(2..=4).contains(&degree) {
        return Err(SolveError::UnsupportedDegree(degree));
    }
    if coeffs[0].abs() < TOLERANCE {
        return Err(SolveError::ZeroLeadingCoefficient);
    }

    let (roots, parabola) = match degree {
        2 => {
            let (roots, parabola) = quadratic(coeffs[0], coeffs[1], coeffs[2]);
            (roots, Some(parabola))
        },
        3 => {
            let coeffs: &[f64; 4] = coeffs.try_into().unwrap();
            (
                extractor
                    .cubic_roots(coeffs)
                    .into_iter()
                    .map(classify)
                    .collect(),
                None,
            )
        },
        _ => {
            let coeffs: &[f64; 5] = coeffs.try_into().unwrap();
            (
                extractor
                    .quartic_roots(coeffs)
                    .into_iter()
                    .map(classify)
                    .collect(),
                None,
            )
        },
    };

    Ok(RootReport {
        coefficients: coeffs.to_vec(),
        roots,
        parabola,
    })
}

/// Solves the polynomial given by `coeffs` with the default [`ClosedForm`] collaborator.
pub fn solve(coeffs: &[f64]) -> Result<RootReport, SolveError> {
    solve_with(coeffs, &ClosedForm)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Collects the real roots, sorted, panicking on any other kind.
    fn sorted_real_roots(report: &RootReport) -> Vec<f64> {
        let mut roots: Vec<f64> = report
            .roots
            .iter()
            .map(|root| match root {
                Root::Real(value) => *value,
                other => panic!("expected a real root, got {:?}", other),
            })
            .collect();
        roots.sort_by(f64::total_cmp);
        roots
    }

    #[test]
    fn quadratic_with_two_real_roots() {
        let report = solve(&[1.0, -5.0, 6.0]).unwrap();
        assert_eq!(sorted_real_roots(&report), vec![2.0, 3.0]);
        assert_eq!(report.real_count(), 2);

        let parabola = report.parabola.as_ref().unwrap();
        assert_eq!(parabola.vertex, (2.5, -0.25));
        assert!(parabola.opens_upward);
        assert_eq!(parabola.discriminant, 1.0);
    }

    #[test]
    fn quadratic_with_double_root() {
        let report = solve(&[1.0, -4.0, 4.0]).unwrap();
        assert_eq!(sorted_real_roots(&report), vec![2.0, 2.0]);
        assert_eq!(report.parabola.as_ref().unwrap().vertex, (2.0, 0.0));
    }

    #[test]
    fn quadratic_with_complex_pair() {
        let report = solve(&[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(report.complex_count(), 2);
        assert_eq!(report.format_roots(6), vec!["i", "-i"]);
        assert!(report.parabola.as_ref().unwrap().opens_upward);
    }

    #[test]
    fn downward_parabola() {
        let report = solve(&[-1.0, 0.0, 4.0]).unwrap();
        assert_eq!(sorted_real_roots(&report), vec![-2.0, 2.0]);
        assert!(!report.parabola.as_ref().unwrap().opens_upward);
    }

    #[test]
    fn cubic_has_no_parabola_analysis() {
        let report = solve(&[1.0, -6.0, 11.0, -6.0]).unwrap();
        assert_eq!(report.parabola, None);
        assert_eq!(report.real_count(), 3);

        let roots = sorted_real_roots(&report);
        for (got, want) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-8);
        }
    }

    #[test]
    fn quartic_mixes_real_and_complex_roots() {
        let report = solve(&[1.0, 0.0, 0.0, 0.0, -1.0]).unwrap();
        assert_eq!(report.real_count(), 2);
        assert_eq!(report.complex_count(), 2);
        assert_eq!(report.classification(), "two real roots and one conjugate pair");
    }

    #[test]
    fn classification_labels() {
        assert_eq!(
            solve(&[1.0, -6.0, 11.0, -6.0]).unwrap().classification(),
            "three real roots",
        );
        assert_eq!(
            solve(&[1.0, 0.0, 1.0]).unwrap().classification(),
            "one conjugate pair",
        );
        assert_eq!(
            solve(&[1.0, 0.0, 5.0, 0.0, 4.0]).unwrap().classification(),
            "two conjugate pairs",
        );
    }

    #[test]
    fn equation_rendering() {
        let report = solve(&[1.0, -5.0, 6.0]).unwrap();
        assert_eq!(report.equation(), "x² - 5x + 6 = 0");

        let report = solve(&[2.0, 0.0, -1.0, 0.5]).unwrap();
        assert_eq!(report.equation(), "2x³ - x + 0.5 = 0");
    }

    #[test]
    fn degree_and_leading_coefficient_are_validated() {
        assert_eq!(solve(&[1.0, 2.0]), Err(SolveError::UnsupportedDegree(1)));
        assert_eq!(
            solve(&[1.0, 0.0, 0.0, 0.0, 0.0, -1.0]),
            Err(SolveError::UnsupportedDegree(5)),
        );
        assert_eq!(
            solve(&[0.0, 1.0, 2.0, 3.0]),
            Err(SolveError::ZeroLeadingCoefficient),
        );
    }

    /// A collaborator that refuses to reduce anything to a number.
    struct SymbolicOnly;

    impl ExactRoots for SymbolicOnly {
        fn cubic_roots(&self, _: &[f64; 4]) -> Vec<ExactRoot> {
            (0..3).map(|i| ExactRoot::Symbolic(format!("r{i}"))).collect()
        }

        fn quartic_roots(&self, _: &[f64; 5]) -> Vec<ExactRoot> {
            (0..4).map(|i| ExactRoot::Symbolic(format!("r{i}"))).collect()
        }
    }

    #[test]
    fn symbolic_roots_stay_unresolved() {
        let report = solve_with(&[1.0, 0.0, 0.0, -1.0], &SymbolicOnly).unwrap();
        assert_eq!(report.unresolved_count(), 3);
        assert_eq!(report.format_roots(6), vec!["r0", "r1", "r2"]);
    }
}
