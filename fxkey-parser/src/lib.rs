//! Tokenizer and expression parser for coefficient strings.
//!
//! Coefficient cells may contain plain numbers (`-3.5`), arithmetic (`1/2 + 1`), LaTeX-like
//! markup (`\frac{1}{2}`, `\pi`), and calls to a small set of math functions (`sqrt(5)`,
//! `sin(pi/2)`). This crate turns such a string into an abstract syntax tree:
//!
//! 1. [`latex::normalize`] rewrites the LaTeX-like notation into plain infix notation.
//! 2. [`tokenizer`] splits the normalized string into tokens.
//! 3. [`parser::Parser`] parses the tokens into an [`Expr`](parser::ast::Expr).
//!
//! Evaluation of the tree is the concern of the `fxkey-compute` crate; this crate never
//! computes a value.

pub mod latex;
pub mod parser;
pub mod tokenizer;
