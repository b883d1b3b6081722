//! Error kinds produced by the parser.

use fxkey_error::error_kind;

error_kind! {
    /// The parser encountered a token it cannot begin or continue an expression with.
    UnexpectedToken {
        /// The lexeme of the offending token.
        found: String,
    },
    message = format!("unexpected `{}`", found),
    labels = vec!["expected an expression here".to_string()],
}

error_kind! {
    /// The source ended in the middle of an expression.
    UnexpectedEof,
    message = "the expression ends unexpectedly",
    labels = vec!["more input was expected here".to_string()],
}

error_kind! {
    /// An opening parenthesis was never closed.
    UnclosedParen,
    message = "this parenthesis is never closed",
    labels = vec!["opened here".to_string()],
    help = "add a closing `)` to match it",
}

error_kind! {
    /// A numeric literal could not be converted to a number.
    InvalidNumber {
        /// The lexeme of the literal.
        value: String,
    },
    message = format!("`{}` is not a valid number", value),
    labels = vec!["this literal".to_string()],
}
