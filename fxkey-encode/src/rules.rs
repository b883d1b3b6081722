//! Rewrite rule tables.
//!
//! A table is an ordered list of find/replace rules, applied strictly in order: each rule sees
//! the full output of the previous one, so later rules may (and in real tables do) rewrite the
//! output of earlier rules. Tables come from external configuration and are treated as opaque
//! data; the engine never reorders or deduplicates them.

/// How a rule's `find` text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    /// `find` is matched as an exact substring.
    Literal,

    /// `find` is a regular expression; `replace` may use `$n` capture references.
    Pattern,
}

/// One find/replace rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewriteRule {
    /// The text or pattern to search for.
    pub find: String,

    /// The replacement text.
    pub replace: String,

    /// Whether `find` is a literal or a pattern.
    pub kind: RuleKind,

    /// A human-readable description carried along from the rule table.
    pub description: String,

    /// Whether the generic pass skips this rule. Fraction structure is handled by the
    /// dedicated pre-pass in [`rewrite`](crate::rewrite); rules that target fraction notation
    /// directly would fight it, so they are excluded from the generic pass entirely.
    pub excluded_from_generic_pass: bool,
}

impl RewriteRule {
    /// A literal substring rule.
    pub fn literal(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            kind: RuleKind::Literal,
            description: String::new(),
            excluded_from_generic_pass: false,
        }
    }

    /// A regex rule.
    pub fn pattern(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            kind: RuleKind::Pattern,
            description: String::new(),
            excluded_from_generic_pass: false,
        }
    }

    /// Builds a rule from an externally-loaded table record, deriving the exclusion flag from
    /// the record's description: historically, fraction-targeting rules are tagged by the word
    /// `frac` in their description, and tables in the wild rely on that convention.
    pub fn from_table_record(
        find: impl Into<String>,
        replace: impl Into<String>,
        kind: RuleKind,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            find: find.into(),
            replace: replace.into(),
            kind,
            excluded_from_generic_pass: description.contains("frac"),
            description,
        }
    }

    /// Tags the rule with a description without changing its exclusion flag.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An ordered, immutable list of rewrite rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    /// Builds a table, preserving the given order exactly.
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// The rules, in application order.
    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }

    /// The number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RewriteRule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = RewriteRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn table_records_derive_exclusion_from_the_description() {
        let excluded = RewriteRule::from_table_record(
            r"\frac",
            "a",
            RuleKind::Literal,
            "rewrite frac markers",
        );
        assert!(excluded.excluded_from_generic_pass);

        let included = RewriteRule::from_table_record(
            "pi",
            "qK",
            RuleKind::Literal,
            "pi keystroke",
        );
        assert!(!included.excluded_from_generic_pass);
    }

    #[test]
    fn order_is_preserved() {
        let table: RuleTable = [
            RewriteRule::literal("b", "c"),
            RewriteRule::literal("a", "b"),
        ]
        .into_iter()
        .collect();

        let finds: Vec<&str> = table.iter().map(|rule| rule.find.as_str()).collect();
        assert_eq!(finds, vec!["b", "a"]);
    }
}
