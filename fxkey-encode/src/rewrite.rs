//! The rule-based rewrite engine.
//!
//! [`encode`] turns one raw coefficient string into its keystroke token in two stages: a
//! fraction pre-pass that collapses `\frac{NUM}{DEN}` structure into the calculator's infix
//! `NUM a DEN` form, then a generic pass that applies the rule table in order. Both stages are
//! pure text rewriting; nothing here understands the mathematics of the input.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::rules::{RuleKind, RuleTable};

/// The hard cap on fraction pre-pass iterations. Each iteration peels at least one level of
/// fraction nesting, so any input within this nesting depth rewrites fully; anything deeper
/// (or malformed in a way that oscillates) stops here and returns best-effort output.
pub const MAX_FRACTION_ITERATIONS: usize = 20;

/// Matches one `frac{NUM}{DEN}` occurrence, backslash optional. The argument groups allow one
/// level of inner braces; deeper nesting is peeled by re-matching the spliced output until the
/// fixpoint, not by this pattern.
static FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\?frac\{((?:\{.*?\}|[^{}])+)\}\{((?:\{.*?\}|[^{}])+)\}")
        .expect("fraction pattern is valid")
});

/// Encodes one raw coefficient string into its keystroke token.
///
/// Deterministic: the output depends only on the input and the table. Empty input (after
/// whitespace stripping) encodes to the empty string rather than an error; a blank cell is a
/// legitimate "no coefficient here".
///
/// Note that the generic pass runs over fraction parts during the pre-pass *and* over the
/// whole spliced string afterwards, so a rule whose replacement re-contains its own `find`
/// text is applied twice to fraction arguments. Rule tables in the field are written with
/// this in mind; preserving it keeps their output byte-for-byte stable.
pub fn encode(raw: &str, rules: &RuleTable) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return String::new();
    }

    let mut result = stripped;
    for _ in 0..MAX_FRACTION_ITERATIONS {
        let next = FRACTION
            .replace_all(&result, |caps: &Captures| {
                format!(
                    "{}a{}",
                    apply_rules(&caps[1], rules),
                    apply_rules(&caps[2], rules),
                )
            })
            .into_owned();

        if next == result {
            break;
        }
        result = next;
    }

    apply_rules(&result, rules)
}

/// Applies the generic pass: every non-excluded rule, in table order, each over the full
/// output of the previous one.
fn apply_rules(input: &str, rules: &RuleTable) -> String {
    let mut result = input.to_string();

    for rule in rules.iter() {
        if rule.excluded_from_generic_pass {
            continue;
        }

        match rule.kind {
            RuleKind::Literal => {
                result = result.replace(&rule.find, &rule.replace);
            },
            RuleKind::Pattern => match Regex::new(&rule.find) {
                Ok(regex) => {
                    result = regex.replace_all(&result, rule.replace.as_str()).into_owned();
                },
                Err(error) => {
                    tracing::warn!(pattern = %rule.find, %error, "skipping malformed pattern rule");
                },
            },
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::rules::RewriteRule;

    /// Builds `\frac{\frac{...}{d}}{d+1}` nested `depth` levels deep, innermost numerator `1`.
    fn nested_fraction(depth: usize) -> String {
        let mut out = "1".to_string();
        for level in 0..depth {
            out = format!("\\frac{{{out}}}{{{}}}", level + 2);
        }
        out
    }

    #[test]
    fn empty_input_encodes_to_empty() {
        let table = RuleTable::new(vec![RewriteRule::literal("1", "q1")]);
        assert_eq!(encode("", &table), "");
        assert_eq!(encode("   ", &table), "");
    }

    #[test]
    fn whitespace_is_stripped_before_rewriting() {
        let table = RuleTable::new(vec![RewriteRule::literal("12", "qX")]);
        assert_eq!(encode("1 2", &table), "qX");
    }

    #[test]
    fn literal_rules_chain_in_table_order() {
        let table = RuleTable::new(vec![
            RewriteRule::literal("a", "b"),
            RewriteRule::literal("b", "c"),
        ]);
        // the second rule sees the first rule's output
        assert_eq!(encode("a", &table), "c");
    }

    #[test]
    fn pattern_rules_substitute_with_captures() {
        let table = RuleTable::new(vec![RewriteRule::pattern(r"([0-9])x", "${1}qX")]);
        assert_eq!(encode("3x+4x", &table), "3qX+4qX");
    }

    #[test]
    fn malformed_pattern_is_skipped() {
        let table = RuleTable::new(vec![
            RewriteRule::pattern("(unclosed", "!"),
            RewriteRule::literal("2", "q2"),
        ]);
        // the broken rule contributes nothing; later rules still run
        assert_eq!(encode("2", &table), "q2");
    }

    #[test]
    fn simple_fraction_uses_the_a_separator() {
        assert_eq!(encode(r"\frac{1}{2}", &RuleTable::default()), "1a2");
    }

    #[test]
    fn backslash_is_optional_on_fractions() {
        assert_eq!(encode("frac{1}{2}", &RuleTable::default()), "1a2");
    }

    #[test]
    fn nested_fractions_resolve_inside_out() {
        assert_eq!(
            encode(r"\frac{\frac{1}{2}}{3}", &RuleTable::default()),
            "1a2a3",
        );
        assert_eq!(encode(&nested_fraction(3), &RuleTable::default()), "1a2a3a4");
    }

    #[test]
    fn generic_rules_apply_to_fraction_parts_and_again_to_the_whole() {
        let table = RuleTable::new(vec![RewriteRule::literal("1", "[1]")]);
        // the part rewrite yields `[1]a2`, and the final pass rewrites the `1` inside it
        assert_eq!(encode(r"\frac{1}{2}", &table), "[[1]]a2");
    }

    #[test]
    fn fraction_tagged_rules_never_run() {
        let table = RuleTable::new(vec![RewriteRule::from_table_record(
            r"\\frac",
            "F",
            RuleKind::Literal,
            "legacy frac marker",
        )]);
        assert_eq!(encode(r"\frac{1}{2}", &table), "1a2");
    }

    #[test]
    fn nesting_within_the_cap_rewrites_fully() {
        let expected = (1..=20).map(|n| n.to_string()).collect::<Vec<_>>().join("a");
        assert_eq!(encode(&nested_fraction(19), &RuleTable::default()), expected);
    }

    #[test]
    fn nesting_beyond_the_cap_returns_best_effort() {
        let encoded = encode(&nested_fraction(25), &RuleTable::default());
        assert!(encoded.contains("frac"));
    }

    #[test]
    fn encoding_is_deterministic() {
        let table = RuleTable::new(vec![
            RewriteRule::literal("pi", "qK"),
            RewriteRule::pattern(r"([0-9])\(", "${1}O("),
        ]);
        let input = r"\frac{2pi}{3(4)}";
        assert_eq!(encode(input, &table), encode(input, &table));
    }
}
