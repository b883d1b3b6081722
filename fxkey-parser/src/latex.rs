//! Normalization of LaTeX-like coefficient notation into plain infix notation.
//!
//! Coefficient cells are frequently pasted out of worksheets that use LaTeX markup, so the
//! notation family accepted here is a small, fixed subset of it: `\frac{..}{..}` fractions
//! (possibly nested), the `\pi` constant, `\cdot`/`\times`/`\div` operators and decorative
//! `\left(`/`\right)` delimiters. Everything is rewritten into notation the tokenizer
//! understands; no evaluation happens here.

/// Literal notation substitutions applied after fractions have been rewritten. Order matters:
/// the `\left`/`\right` delimiters must be consumed before stray backslashes are dropped.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\\left(", "("),
    ("\\right)", ")"),
    ("\\left{", "("),
    ("\\right}", ")"),
    ("\\cdot", "*"),
    ("\\times", "*"),
    ("\\div", "/"),
    ("\\pi", "pi"),
];

/// Normalizes a coefficient string: strips all whitespace, rewrites `\frac{A}{B}` into
/// `(A)/(B)` (recursively, innermost first), and applies the notation substitutions above.
/// Any backslash remaining after the substitutions is decorative and is dropped.
pub fn normalize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut result = convert_fractions(&stripped);

    for &(find, replace) in REPLACEMENTS {
        result = result.replace(find, replace);
    }

    result.replace('\\', "")
}

/// Rewrites every `frac{NUM}{DEN}` group (with or without a leading backslash) into
/// `(NUM)/(DEN)`, recursing into the numerator and denominator first so that nested fractions
/// resolve from the inside out. Malformed groups (unbalanced braces) are left untouched.
pub fn convert_fractions(input: &str) -> String {
    let mut result = input.to_string();
    let mut search_from = 0;

    while let Some(found) = result[search_from..].find("frac{") {
        let start = search_from + found;
        let open = start + "frac".len();

        let Some((numerator, after_numerator)) = brace_group(&result, open) else {
            search_from = open;
            continue;
        };
        let Some((denominator, end)) = brace_group(&result, after_numerator) else {
            search_from = open;
            continue;
        };

        // include the `\` of `\frac` in the replaced range if it is present
        let command_start = if result[..start].ends_with('\\') { start - 1 } else { start };

        let numerator = convert_fractions(&numerator);
        let denominator = convert_fractions(&denominator);
        result.replace_range(command_start..end, &format!("({})/({})", numerator, denominator));
        search_from = 0;
    }

    result
}

/// Reads one balanced brace group starting at `open` (which must index a `{`). Returns the
/// group's contents and the index just past the closing `}`, or [`None`] if the group never
/// closes or `open` does not point at a brace.
fn brace_group(source: &str, open: usize) -> Option<(String, usize)> {
    if source.as_bytes().get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in source.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((source[open + 1..offset].to_string(), offset + 1));
                }
            },
            _ => {},
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn simple_fraction() {
        assert_eq!(normalize(r"\frac{1}{2}"), "(1)/(2)");
    }

    #[test]
    fn nested_fraction() {
        assert_eq!(normalize(r"\frac{\frac{1}{2}}{3}"), "((1)/(2))/(3)");
    }

    #[test]
    fn fraction_without_backslash() {
        assert_eq!(normalize("frac{x}{y}"), "(x)/(y)");
    }

    #[test]
    fn constants_and_operators() {
        assert_eq!(normalize(r"2\cdot\pi"), "2*pi");
        assert_eq!(normalize(r"6\div3"), "6/3");
    }

    #[test]
    fn decorative_delimiters() {
        assert_eq!(normalize(r"\left(1+2\right)"), "(1+2)");
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(normalize(" 1 + 2 "), "1+2");
    }

    #[test]
    fn unbalanced_fraction_is_left_alone() {
        assert_eq!(normalize(r"\frac{1}{2"), "frac{1}{2");
    }
}
