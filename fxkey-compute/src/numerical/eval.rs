//! Evaluation of the expression tree against the whitelist.

use crate::funcs;
use fxkey_error::Error;
use fxkey_parser::parser::ast::{Binary, Call, Expr, Literal, Name, Paren, Unary};
use fxkey_parser::parser::op::{BinOpKind, UnaryOpKind};
use super::error::{UndefinedFunction, UndefinedVariable, WrongArgumentCount};

/// Any type that can be evaluated to a number.
pub trait Eval {
    /// Evaluate the expression to a number.
    ///
    /// The result is not checked for finiteness here; `1/0` evaluates to infinity, and the
    /// top-level [`evaluate`](super::evaluate) rejects it after the fact. This keeps the
    /// arithmetic uniform instead of special-casing each operator.
    fn eval(&self) -> Result<f64, Error>;
}

impl Eval for Expr {
    fn eval(&self) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(),
            Expr::Name(name) => name.eval(),
            Expr::Unary(unary) => unary.eval(),
            Expr::Binary(binary) => binary.eval(),
            Expr::Call(call) => call.eval(),
            Expr::Paren(paren) => paren.eval(),
        }
    }
}

impl Eval for Literal {
    fn eval(&self) -> Result<f64, Error> {
        Ok(self.value)
    }
}

impl Eval for Name {
    fn eval(&self) -> Result<f64, Error> {
        funcs::constant(&self.name).ok_or_else(|| {
            Error::new(vec![self.span.clone()], UndefinedVariable {
                name: self.name.clone(),
            })
        })
    }
}

impl Eval for Unary {
    fn eval(&self) -> Result<f64, Error> {
        let operand = self.operand.eval()?;
        match self.op {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}

impl Eval for Binary {
    fn eval(&self) -> Result<f64, Error> {
        let lhs = self.lhs.eval()?;
        let rhs = self.rhs.eval()?;
        Ok(match self.op {
            BinOpKind::Add => lhs + rhs,
            BinOpKind::Sub => lhs - rhs,
            BinOpKind::Mul => lhs * rhs,
            BinOpKind::Div => lhs / rhs,
            BinOpKind::Exp => lhs.powf(rhs),
        })
    }
}

impl Eval for Call {
    fn eval(&self) -> Result<f64, Error> {
        let builtin = funcs::get(&self.name.name).ok_or_else(|| {
            Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: funcs::suggestions(&self.name.name),
            })
        })?;

        if self.args.len() != builtin.arity {
            return Err(Error::new(vec![self.span.clone()], WrongArgumentCount {
                name: self.name.name.clone(),
                expected: builtin.arity,
                given: self.args.len(),
            }));
        }

        let arg = self.args[0].eval()?;
        Ok(builtin.eval(arg))
    }
}

impl Eval for Paren {
    fn eval(&self) -> Result<f64, Error> {
        self.inner.eval()
    }
}
