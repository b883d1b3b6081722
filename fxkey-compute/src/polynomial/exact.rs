//! Exact root extraction for cubic and quartic polynomials.
//!
//! The polynomial solver handles quadratics itself, but delegates degrees 3 and 4 to an
//! [`ExactRoots`] collaborator. The default collaborator is [`ClosedForm`], which applies
//! Cardano's and Ferrari's formulas over [`Complex64`]. A collaborator may also return
//! [`ExactRoot::Symbolic`] when it can only express a root as text, in which case the solver
//! surfaces the root unresolved instead of guessing a numeric value.

use num_complex::Complex64;

use crate::consts::TOLERANCE;

/// One root as reported by an exact-root collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ExactRoot {
    /// The root as a complex number.
    Numeric(Complex64),

    /// A textual form of the root that could not be reduced to a number.
    Symbolic(String),
}

/// An algorithm that produces the exact roots of cubic and quartic polynomials.
///
/// Coefficients are ordered from the highest power down, and the leading coefficient is
/// guaranteed non-zero by the caller. Implementations must return exactly as many roots as the
/// degree, with multiplicity.
pub trait ExactRoots {
    /// The roots of `a x^3 + b x^2 + c x + d`, given `[a, b, c, d]`.
    fn cubic_roots(&self, coeffs: &[f64; 4]) -> Vec<ExactRoot>;

    /// The roots of `a x^4 + b x^3 + c x^2 + d x + e`, given `[a, b, c, d, e]`.
    fn quartic_roots(&self, coeffs: &[f64; 5]) -> Vec<ExactRoot>;
}

/// The default collaborator: Cardano's formula for cubics, Ferrari's for quartics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedForm;

impl ExactRoots for ClosedForm {
    fn cubic_roots(&self, coeffs: &[f64; 4]) -> Vec<ExactRoot> {
        cardano(coeffs)
            .into_iter()
            .map(ExactRoot::Numeric)
            .collect()
    }

    fn quartic_roots(&self, coeffs: &[f64; 5]) -> Vec<ExactRoot> {
        ferrari(coeffs)
            .into_iter()
            .map(ExactRoot::Numeric)
            .collect()
    }
}

/// The roots of the monic quadratic `t^2 + b t + c` over the complex numbers.
fn complex_quadratic(b: Complex64, c: Complex64) -> [Complex64; 2] {
    let half_b = b / 2.0;
    let sqrt_disc = (half_b * half_b - c).sqrt();
    [-half_b + sqrt_disc, -half_b - sqrt_disc]
}

/// Cardano's formula for `a x^3 + b x^2 + c x + d`.
///
/// The cubic is depressed with `x = t - b / 3a`, giving `t^3 + p t + q`. Writing `t = u + v`
/// with `3uv = -p` reduces the problem to a quadratic in `u^3`; the three cube roots of one
/// then rotate `(u, v)` into the three roots.
fn cardano(&[a, b, c, d]: &[f64; 4]) -> Vec<Complex64> {
    let b = b / a;
    let c = c / a;
    let d = d / a;

    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

    if p.abs() < TOLERANCE && q.abs() < TOLERANCE {
        // triple root at the shift point
        return vec![Complex64::new(-shift, 0.0); 3];
    }

    // u^3 and v^3 are the roots of z^2 + q z - p^3 / 27
    let half_q = Complex64::new(q / 2.0, 0.0);
    let sqrt_disc = (half_q * half_q + Complex64::new(p * p * p / 27.0, 0.0)).sqrt();

    let mut u = (-half_q + sqrt_disc).cbrt();
    if u.norm() < TOLERANCE {
        // the principal branch degenerated; the conjugate branch cannot, since p != 0
        u = (-half_q - sqrt_disc).cbrt();
    }
    let v = -Complex64::new(p / 3.0, 0.0) / u;

    // omega is a primitive cube root of unity
    let omega = Complex64::new(-0.5, 3.0f64.sqrt() / 2.0);
    let omega_bar = omega.conj();

    [u + v, omega * u + omega_bar * v, omega_bar * u + omega * v]
        .into_iter()
        .map(|t| t - shift)
        .collect()
}

/// Ferrari's method for `a x^4 + b x^3 + c x^2 + d x + e`.
///
/// The quartic is depressed with `x = t - b / 4a` to `t^4 + p t^2 + q t + r`, then factored
/// into two quadratics `(t^2 + alpha t + beta)(t^2 - alpha t + gamma)`. Matching coefficients
/// makes `alpha^2` a root of the resolvent cubic, and the largest-magnitude resolvent root
/// keeps the division by `alpha` well conditioned.
fn ferrari(&[a, b, c, d, e]: &[f64; 5]) -> Vec<Complex64> {
    let b = b / a;
    let c = c / a;
    let d = d / a;
    let e = e / a;

    let shift = b / 4.0;
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = d - b * c / 2.0 + b2 * b / 8.0;
    let r = e - b * d / 4.0 + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;

    let roots = if q.abs() < TOLERANCE {
        // biquadratic: t^4 + p t^2 + r factors through y = t^2
        let [y1, y2] = complex_quadratic(Complex64::new(p, 0.0), Complex64::new(r, 0.0));
        let (s1, s2) = (y1.sqrt(), y2.sqrt());
        [s1, -s1, s2, -s2]
    } else {
        // resolvent cubic in z = alpha^2
        let z = cardano(&[1.0, 2.0 * p, p * p - 4.0 * r, -(q * q)])
            .into_iter()
            .max_by(|lhs, rhs| lhs.norm().total_cmp(&rhs.norm()))
            .unwrap_or_default();

        let alpha = z.sqrt();
        let p = Complex64::new(p, 0.0);
        let q = Complex64::new(q, 0.0);
        let beta = (p + z - q / alpha) / 2.0;
        let gamma = (p + z + q / alpha) / 2.0;

        let [t1, t2] = complex_quadratic(alpha, beta);
        let [t3, t4] = complex_quadratic(-alpha, gamma);
        [t1, t2, t3, t4]
    };

    roots.into_iter().map(|t| t - shift).collect()
}
