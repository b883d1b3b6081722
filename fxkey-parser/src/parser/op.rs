//! Binary and unary operators, with the precedence table used by the parser.

use crate::tokenizer::TokenKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The kinds of binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

/// The precedence handed to a unary operator's operand: tighter than multiplication, looser
/// than exponentiation, so `-2^2` parses as `-(2^2)`.
pub const UNARY_PRECEDENCE: u8 = 3;

impl BinOpKind {
    /// Returns the binary operator corresponding to the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(BinOpKind::Add),
            TokenKind::Sub => Some(BinOpKind::Sub),
            TokenKind::Mul => Some(BinOpKind::Mul),
            TokenKind::Div => Some(BinOpKind::Div),
            TokenKind::Exp => Some(BinOpKind::Exp),
            _ => None,
        }
    }

    /// The binding precedence of this operator. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Add | BinOpKind::Sub => 1,
            BinOpKind::Mul | BinOpKind::Div => 2,
            BinOpKind::Exp => 4,
        }
    }

    /// The associativity of this operator.
    pub fn associativity(self) -> Associativity {
        match self {
            BinOpKind::Exp => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Exp => "^",
        })
    }
}

/// The kinds of unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    /// Negation, as in `-3`.
    Neg,
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnaryOpKind::Neg => "-",
        })
    }
}
