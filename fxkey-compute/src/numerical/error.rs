//! Error kinds produced while evaluating an expression.

use ariadne::Fmt;
use fxkey_error::{error_kind, EXPR};

error_kind! {
    /// The name does not resolve to a whitelisted constant.
    UndefinedVariable {
        /// The name that was used.
        name: String,
    },
    message = format!("`{}` is not defined", name),
    labels = vec!["this name".to_string()],
    help = format!(
        "only the constants {} and {} are available in coefficient expressions",
        "pi".fg(EXPR),
        "e".fg(EXPR),
    ),
}

error_kind! {
    /// The function is not on the whitelist.
    UndefinedFunction {
        /// The name of the function that was called.
        name: String,

        /// A list of similarly named whitelisted functions, if any.
        suggestions: Vec<String>,
    },
    message = format!("the `{}` function does not exist", name),
    labels = vec!["this function".to_string()],
    help = if suggestions.is_empty() {
        "coefficient expressions can only use the whitelisted math functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
}

error_kind! {
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The name of the function that was called.
        name: String,

        /// The number of arguments that were expected.
        expected: usize,

        /// The number of arguments that were given.
        given: usize,
    },
    message = format!(
        "the `{}` function takes {} argument(s); {} were given",
        name, expected, given,
    ),
    labels = vec!["this function call".to_string()],
}

error_kind! {
    /// The expression evaluated to NaN or infinity.
    NonFiniteResult,
    message = "the expression does not evaluate to a finite number",
    labels = vec!["this expression".to_string()],
    help = "division by zero, logarithms of non-positive numbers, and square roots of \
            negative numbers all produce non-finite values",
}
