pub mod ast;
pub mod error;
pub mod op;

use ast::{Binary, Call, Expr, Literal, Name, Paren, Unary};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use error::{InvalidNumber, UnclosedParen, UnexpectedEof, UnexpectedToken};
use fxkey_error::{Error, ErrorKind};
use op::{Associativity, BinOpKind, UnaryOpKind, UNARY_PRECEDENCE};
use std::ops::Range;

/// A parser for a single coefficient expression. This is the type to use to parse an arbitrary
/// (already [normalized](crate::latex::normalize)) coefficient string into an abstract syntax
/// tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token without advancing the cursor.
    fn peek(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the current token and advances the cursor past it.
    fn advance(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Parses the entire token stream as one expression. It is an error for tokens to remain
    /// after the expression ends.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_binary(0)?;

        if let Some(token) = self.peek() {
            return Err(self.error(UnexpectedToken {
                found: token.lexeme.to_string(),
            }));
        }

        Ok(expr)
    }

    /// Parses a (possibly implicit) binary expression using precedence climbing, consuming
    /// operators that bind at least as tightly as `min_precedence`.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, Error> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some(token) = self.peek() else { break };

            if let Some(op) = BinOpKind::from_token(token.kind) {
                if op.precedence() < min_precedence {
                    break;
                }

                self.advance();
                let next_min = match op.associativity() {
                    Associativity::Left => op.precedence() + 1,
                    Associativity::Right => op.precedence(),
                };
                let rhs = self.parse_binary(next_min)?;
                let span = lhs.span().start..rhs.span().end;
                lhs = Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                    implicit: false,
                    span,
                });
            } else if token.kind.starts_factor() {
                // implicit multiplication: `2pi`, `3(4)`, `(1)(2)`
                let op = BinOpKind::Mul;
                if op.precedence() < min_precedence {
                    break;
                }

                let rhs = self.parse_binary(op.precedence() + 1)?;
                let span = lhs.span().start..rhs.span().end;
                lhs = Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                    implicit: true,
                    span,
                });
            } else {
                break;
            }
        }

        Ok(lhs)
    }

    /// Parses leading unary operators. A leading `+` is accepted and discarded.
    fn parse_prefix(&mut self) -> Result<Expr, Error> {
        match self.peek().map(|token| token.kind) {
            Some(TokenKind::Sub) => {
                let op_span = self.span();
                self.advance();
                let operand = self.parse_binary(UNARY_PRECEDENCE)?;
                let span = op_span.start..operand.span().end;
                Ok(Expr::Unary(Unary {
                    op: UnaryOpKind::Neg,
                    operand: Box::new(operand),
                    span,
                }))
            },
            Some(TokenKind::Add) => {
                self.advance();
                self.parse_prefix()
            },
            _ => self.parse_primary(),
        }
    }

    /// Parses a primary expression: a literal, a name, a function call, or a parenthesized
    /// group.
    fn parse_primary(&mut self) -> Result<Expr, Error> {
        let Some(token) = self.peek().cloned() else {
            return Err(Error::new(vec![self.eof_span()], UnexpectedEof));
        };

        match token.kind {
            TokenKind::Int | TokenKind::Float => {
                self.advance();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    Error::new(vec![token.span.clone()], InvalidNumber {
                        value: token.lexeme.to_string(),
                    })
                })?;
                Ok(Expr::Literal(Literal { value, span: token.span }))
            },
            TokenKind::Name => {
                self.advance();
                let name = Name {
                    name: token.lexeme.to_string(),
                    span: token.span.clone(),
                };

                if self.peek().map(|next| next.kind) == Some(TokenKind::OpenParen) {
                    self.parse_call_args(name)
                } else {
                    Ok(Expr::Name(name))
                }
            },
            TokenKind::OpenParen => {
                let open_span = token.span.clone();
                self.advance();
                let inner = self.parse_binary(0)?;

                match self.peek().map(|next| next.kind) {
                    Some(TokenKind::CloseParen) => {
                        let close_span = self.span();
                        self.advance();
                        Ok(Expr::Paren(Paren {
                            inner: Box::new(inner),
                            span: open_span.start..close_span.end,
                        }))
                    },
                    _ => Err(Error::new(vec![open_span], UnclosedParen)),
                }
            },
            _ => Err(self.error(UnexpectedToken {
                found: token.lexeme.to_string(),
            })),
        }
    }

    /// Parses the parenthesized, comma-separated argument list of a function call. The cursor
    /// must sit on the opening parenthesis.
    fn parse_call_args(&mut self, name: Name) -> Result<Expr, Error> {
        let open_span = self.span();
        self.advance();
        let mut args = Vec::new();

        if self.peek().map(|token| token.kind) != Some(TokenKind::CloseParen) {
            loop {
                args.push(self.parse_binary(0)?);

                match self.peek().map(|token| token.kind) {
                    Some(TokenKind::Comma) => {
                        self.advance();
                    },
                    Some(TokenKind::CloseParen) => break,
                    _ => return Err(Error::new(vec![open_span], UnclosedParen)),
                }
            }
        }

        let close_span = self.span();
        self.advance();
        Ok(Expr::Call(Call {
            span: name.span.start..close_span.end,
            name,
            args,
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the given source, panicking on failure.
    fn parse(source: &str) -> Expr {
        Parser::new(source).parse_expr().unwrap()
    }

    /// Extracts the binary node from an expression, panicking if it is any other node.
    fn as_binary(expr: &Expr) -> &Binary {
        match expr {
            Expr::Binary(binary) => binary,
            other => panic!("expected a binary expression, got {:?}", other),
        }
    }

    #[test]
    fn precedence() {
        // 1 + (2 * 3)
        let expr = parse("1+2*3");
        let add = as_binary(&expr);
        assert_eq!(add.op, BinOpKind::Add);
        assert_eq!(as_binary(&add.rhs).op, BinOpKind::Mul);
    }

    #[test]
    fn exponent_is_right_associative() {
        // 2 ^ (3 ^ 2)
        let expr = parse("2^3^2");
        let outer = as_binary(&expr);
        assert_eq!(outer.op, BinOpKind::Exp);
        assert_eq!(as_binary(&outer.rhs).op, BinOpKind::Exp);
    }

    #[test]
    fn negation_binds_looser_than_exponent() {
        // -(2 ^ 2)
        let expr = parse("-2^2");
        let Expr::Unary(unary) = &expr else {
            panic!("expected a unary expression, got {:?}", expr);
        };
        assert_eq!(as_binary(&unary.operand).op, BinOpKind::Exp);
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("2pi");
        let mul = as_binary(&expr);
        assert_eq!(mul.op, BinOpKind::Mul);
        assert!(mul.implicit);
    }

    #[test]
    fn call_with_args() {
        let Expr::Call(call) = parse("sqrt(5)") else {
            panic!("expected a call expression");
        };
        assert_eq!(call.name.name, "sqrt");
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn unclosed_paren_is_an_error() {
        assert!(Parser::new("(1+2").parse_expr().is_err());
    }

    #[test]
    fn trailing_tokens_are_an_error() {
        assert!(Parser::new("1+2)").parse_expr().is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Parser::new("").parse_expr().is_err());
    }
}
