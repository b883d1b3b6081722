//! The keystroke side of the pipeline: turning raw coefficient strings into calculator
//! keystroke tokens, and composing those tokens into complete instruction strings.
//!
//! Encoding is write-only text rewriting, driven by an ordered [`RuleTable`]: it never parses
//! the input into a tree, and it deliberately shares nothing with the numeric evaluator other
//! than the notation the user typed. The [`rewrite`] module implements the rewrite engine,
//! [`geometry`] and [`equation`] implement the two instruction grammars layered on top of it.

pub mod equation;
pub mod geometry;
pub mod rewrite;
pub mod rules;

pub use equation::{assemble_equation_instruction, VersionConfig, VersionTable};
pub use geometry::{
    assemble_geometry_instruction,
    split_values,
    Dimension,
    GeometryTables,
    GroupSpec,
    Operation,
    Shape,
};
pub use rewrite::encode;
pub use rules::{RewriteRule, RuleKind, RuleTable};
