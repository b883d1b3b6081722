//! Numeric verification engines for coefficient data.
//!
//! The keystroke encoding produced by `fxkey-encode` is write-only: once a coefficient has been
//! turned into calculator keystrokes there is no way to check it against anything. This crate
//! provides the independent verification branch of the pipeline: it evaluates the *same* raw
//! coefficient strings to numbers and solves the underlying equation or system, so a wrong
//! entry shows up as a wrong (or missing) mathematical solution.
//!
//! - [`numerical`] evaluates a single coefficient expression to an `f64` inside a restricted
//!   whitelist context (see [`funcs`]).
//! - [`linear`] solves 2–4 unknown linear systems with Gauss-Jordan elimination and classifies
//!   the outcome.
//! - [`polynomial`] solves degree 2–4 polynomial equations and classifies the root set.

pub mod consts;
pub mod error;
pub mod fmt;
pub mod funcs;
pub mod linear;
pub mod numerical;
pub mod polynomial;

pub use error::SolveError;
