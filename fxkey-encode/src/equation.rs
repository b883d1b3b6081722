//! The equation-system instruction grammar and version prefix tables.
//!
//! A linear-system instruction is a version-specific prefix, the required number of encoded
//! coefficient tokens joined by `=`, and a count-specific ending literal. The ending literals
//! (`== =`, `== = =`, `== = = =`) are the calculator's solve-and-step-through key sequence and
//! must be reproduced byte for byte, embedded spaces included.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Prefix configuration for one calculator model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionConfig {
    /// The model's base prefix, used for geometry instructions and as a fallback when no
    /// per-count equation prefix is configured.
    pub base_prefix: String,

    /// Equation prefixes by unknown count.
    pub equation: HashMap<usize, String>,
}

/// Version-to-prefix tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionTable {
    pub versions: HashMap<String, VersionConfig>,
    pub global_defaults: HashMap<usize, String>,
}

static DEFAULT_TABLE: Lazy<VersionTable> = Lazy::new(VersionTable::default);

impl VersionTable {
    /// The standard table, built once.
    pub fn standard() -> &'static Self {
        &DEFAULT_TABLE
    }

    /// The base prefix of a version, if the version is known.
    pub fn base_prefix(&self, version: &str) -> Option<&str> {
        self.versions
            .get(version)
            .map(|config| config.base_prefix.as_str())
    }

    /// The known versions, unordered.
    pub fn supported_versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Resolves the equation prefix for a version and unknown count.
    ///
    /// Resolution order: the exact `(version, count)` entry; the version's base prefix glued
    /// to the last three characters of the global default for that count; the global default
    /// itself; and finally the synthesized `w91{count + 1}`.
    pub fn equation_prefix(&self, version: &str, unknowns: usize) -> String {
        if let Some(config) = self.versions.get(version) {
            if let Some(prefix) = config.equation.get(&unknowns) {
                return prefix.clone();
            }

            if !config.base_prefix.is_empty() {
                if let Some(global) = self.global_defaults.get(&unknowns) {
                    let suffix_start = global.len().saturating_sub(3);
                    return format!("{}{}", config.base_prefix, &global[suffix_start..]);
                }
            }
        }

        if let Some(global) = self.global_defaults.get(&unknowns) {
            return global.clone();
        }

        format!("w91{}", unknowns + 1)
    }
}

impl Default for VersionTable {
    fn default() -> Self {
        let versions = [
            ("fx799", "wj"),
            ("fx880", "kj"),
            ("fx801", "yl"),
            ("fx802", "zm"),
            ("fx803", "an"),
        ]
        .into_iter()
        .map(|(version, base)| {
            let equation = (2..=4).map(|n| (n, format!("{base}91{}", n))).collect();
            (
                version.to_string(),
                VersionConfig {
                    base_prefix: base.to_string(),
                    equation,
                },
            )
        })
        .collect();

        let global_defaults = (2..=4).map(|n| (n, format!("w91{}", n))).collect();

        Self { versions, global_defaults }
    }
}

/// The number of coefficient tokens a system of `unknowns` unknowns requires, when the count
/// is supported.
fn required_tokens(unknowns: usize) -> Option<usize> {
    match unknowns {
        2 => Some(6),
        3 => Some(12),
        4 => Some(20),
        _ => None,
    }
}

/// The count-specific ending literal.
fn ending(unknowns: usize) -> &'static str {
    match unknowns {
        2 => "== =",
        3 => "== = =",
        _ => "== = = =",
    }
}

/// Assembles one equation-system instruction from already-encoded coefficient tokens.
///
/// The first `required` tokens (6, 12 or 20 by unknown count) are joined with `=`, wrapped in
/// the version prefix and the count-specific ending. With too few tokens, or an unsupported
/// count, assembly degrades to the plain `=`-joined dump with a single trailing `=` and no
/// prefix; it never errors.
pub fn assemble_equation_instruction(
    unknowns: usize,
    prefix: &str,
    tokens: &[String],
) -> String {
    if let Some(required) = required_tokens(unknowns) {
        if tokens.len() >= required {
            let joined = tokens[..required].join("=");
            return format!("{prefix}{joined}{}", ending(unknowns));
        }
    }

    tracing::debug!(
        unknowns,
        tokens = tokens.len(),
        "falling back to the degraded equation instruction form",
    );
    format!("{}=", tokens.join("="))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn two_unknown_assembly() {
        let result = assemble_equation_instruction(
            2,
            "wj912",
            &tokens(&["t1", "t2", "t3", "t4", "t5", "t6"]),
        );
        assert_eq!(result, "wj912t1=t2=t3=t4=t5=t6== =");
    }

    #[test]
    fn three_and_four_unknown_endings() {
        let twelve: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
        let result = assemble_equation_instruction(3, "kj913", &twelve);
        assert_eq!(result, "kj9131=2=3=4=5=6=7=8=9=10=11=12== = =");

        let twenty: Vec<String> = (1..=20).map(|n| n.to_string()).collect();
        let result = assemble_equation_instruction(4, "wj914", &twenty);
        assert!(result.ends_with("== = = ="));
        assert!(result.starts_with("wj9141=2="));
    }

    #[test]
    fn excess_tokens_are_dropped() {
        let eight: Vec<String> = (1..=8).map(|n| n.to_string()).collect();
        let result = assemble_equation_instruction(2, "wj912", &eight);
        assert_eq!(result, "wj9121=2=3=4=5=6== =");
    }

    #[test]
    fn short_token_lists_degrade_without_a_prefix() {
        let result = assemble_equation_instruction(2, "wj912", &tokens(&["a", "b"]));
        assert_eq!(result, "a=b=");
    }

    #[test]
    fn unsupported_counts_degrade() {
        let result = assemble_equation_instruction(5, "wj912", &tokens(&["a", "b"]));
        assert_eq!(result, "a=b=");
    }

    #[test]
    fn exact_prefixes_win() {
        let table = VersionTable::standard();
        assert_eq!(table.equation_prefix("fx799", 2), "wj912");
        assert_eq!(table.equation_prefix("fx880", 3), "kj913");
        assert_eq!(table.equation_prefix("fx803", 4), "an914");
    }

    #[test]
    fn base_prefix_plus_global_suffix() {
        let mut table = VersionTable::standard().clone();
        table
            .versions
            .get_mut("fx799")
            .unwrap()
            .equation
            .remove(&3);
        assert_eq!(table.equation_prefix("fx799", 3), "wj913");
    }

    #[test]
    fn unknown_versions_fall_back_to_globals() {
        assert_eq!(VersionTable::standard().equation_prefix("fx999", 2), "w912");
    }

    #[test]
    fn last_resort_prefix_is_synthesized() {
        assert_eq!(VersionTable::standard().equation_prefix("fx999", 5), "w916");
    }

    #[test]
    fn base_prefixes_are_exposed() {
        let table = VersionTable::standard();
        assert_eq!(table.base_prefix("fx799"), Some("wj"));
        assert_eq!(table.base_prefix("fx999"), None);
        assert!(table.supported_versions().any(|v| v == "fx802"));
    }
}
