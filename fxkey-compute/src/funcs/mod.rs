//! The whitelist of functions and constants available to coefficient expressions.
//!
//! This is a hard boundary, not an implementation detail: coefficient cells come from
//! externally-edited worksheets, and evaluation must never reach anything beyond this closed,
//! auditable set. Growing the set is a deliberate act of adding an entry here; nothing is
//! picked up implicitly.

pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A function exposed to coefficient expressions. All whitelisted functions take exactly one
/// argument.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the function is called by.
    pub name: &'static str,

    /// The number of arguments the function takes.
    pub arity: usize,

    func: fn(f64) -> f64,
}

impl Builtin {
    /// Applies the function to its argument.
    pub fn eval(&self, arg: f64) -> f64 {
        (self.func)(arg)
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// The full whitelist.
static TABLE: &[Builtin] = &[
    Builtin { name: "sqrt", arity: 1, func: power::sqrt },
    Builtin { name: "exp", arity: 1, func: power::exp },
    Builtin { name: "log", arity: 1, func: power::log },
    Builtin { name: "ln", arity: 1, func: power::ln },
    Builtin { name: "sin", arity: 1, func: trigonometry::sin },
    Builtin { name: "cos", arity: 1, func: trigonometry::cos },
    Builtin { name: "tan", arity: 1, func: trigonometry::tan },
    Builtin { name: "abs", arity: 1, func: miscellaneous::abs },
];

/// The whitelist, indexed by name.
static BUILTINS: Lazy<HashMap<&'static str, &'static Builtin>> =
    Lazy::new(|| TABLE.iter().map(|builtin| (builtin.name, builtin)).collect());

/// Looks up a whitelisted function by name.
pub fn get(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name).copied()
}

/// Resolves a whitelisted constant by name.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

/// Returns the names of whitelisted functions similar to the given (unknown) name, closest
/// first, for use in error suggestions.
pub fn suggestions(name: &str) -> Vec<String> {
    let mut candidates: Vec<_> = TABLE
        .iter()
        .map(|builtin| (levenshtein(name, builtin.name), builtin.name))
        .filter(|&(distance, _)| distance <= 2)
        .collect();

    candidates.sort();
    candidates
        .into_iter()
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_is_closed() {
        assert!(get("sqrt").is_some());
        assert!(get("eval").is_none());
        assert!(get("powf").is_none());
        assert!(constant("pi").is_some());
        assert!(constant("tau").is_none());
    }

    #[test]
    fn log_is_base_10() {
        let log = get("log").unwrap();
        assert!((log.eval(100.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ln_is_natural() {
        let ln = get("ln").unwrap();
        assert!((ln.eval(std::f64::consts::E) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn suggestions_rank_by_distance() {
        // `sqrt` is one edit away, `sin` two; anything further is dropped
        assert_eq!(
            suggestions("sqt"),
            vec!["sqrt".to_string(), "sin".to_string()],
        );
        assert_eq!(suggestions("abz"), vec!["abs".to_string()]);
        assert!(suggestions("frobnicate").is_empty());
    }
}
