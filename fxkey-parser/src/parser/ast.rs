//! The abstract syntax tree produced by the parser.
//!
//! The tree is deliberately tiny: coefficient cells are single arithmetic expressions, so
//! there are no statements, assignments, or control flow. Each node carries the region of the
//! normalized source it was parsed from, which error reports point back into.

use std::ops::Range;
use super::op::{BinOpKind, UnaryOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `3` or `2.5`.
    Literal(Literal),

    /// A bare name, such as `pi`.
    Name(Name),

    /// A unary operation, such as `-3`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A function call, such as `sqrt(5)`.
    Call(Call),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span.clone(),
            Expr::Name(name) => name.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Paren(paren) => paren.span.clone(),
        }
    }
}

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A bare name, resolved against the constant whitelist during evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name {
    /// The name itself.
    pub name: String,

    /// The region of the source code that this name was parsed from.
    pub span: Range<usize>,
}

/// A unary operation applied to one operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operator.
    pub op: UnaryOpKind,

    /// The operand.
    pub operand: Box<Expr>,

    /// The region of the source code that this operation was parsed from.
    pub span: Range<usize>,
}

/// A binary operation applied to two operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand-side operand.
    pub lhs: Box<Expr>,

    /// The operator.
    pub op: BinOpKind,

    /// The right-hand-side operand.
    pub rhs: Box<Expr>,

    /// Whether the operator was implicitly inserted by the parser, as in `2pi`.
    pub implicit: bool,

    /// The region of the source code that this operation was parsed from.
    pub span: Range<usize>,
}

/// A call to a whitelisted function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function being called.
    pub name: Name,

    /// The arguments to the call.
    pub args: Vec<Expr>,

    /// The region of the source code that this call was parsed from.
    pub span: Range<usize>,
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub inner: Box<Expr>,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses themselves.
    pub span: Range<usize>,
}
