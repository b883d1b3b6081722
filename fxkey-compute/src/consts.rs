//! Numeric tolerances shared by the solvers.

/// The tolerance under which a value is considered zero: singular pivot detection, real-root
/// classification, and zero-coefficient suppression all use this.
pub const TOLERANCE: f64 = 1e-10;

/// The maximum residual a solution may leave in the original equations before it is flagged as
/// approximate. Deliberately looser than [`TOLERANCE`]; elimination on an ill-conditioned
/// system loses more precision than a single comparison does.
pub const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// The number of decimal digits solution values are rounded to before being reported.
pub const SOLUTION_DECIMALS: i32 = 8;

/// The default number of decimal digits used when displaying polynomial roots.
pub const DEFAULT_ROOT_PRECISION: usize = 6;
