//! Free-text sanitization applied before template binding.
//!
//! The whitespace rule is idempotent: sanitizing already-sanitized text is
//! a no-op. LaTeX escaping is a separate, format-specific step applied only
//! at binding time — it is NOT part of the idempotent rule.

/// Sanitizes a free-text field: tabs become single spaces, CRLF/CR become
/// LF, leading/trailing whitespace is trimmed.
pub fn sanitize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', " ")
        .trim()
        .to_string()
}

/// Escapes LaTeX special characters in already-sanitized text.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\_"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_become_single_spaces() {
        assert_eq!(sanitize("a\tb"), "a b");
    }

    #[test]
    fn test_crlf_and_cr_normalize_to_lf() {
        assert_eq!(sanitize("line1\r\nline2\rline3"), "line1\nline2\nline3");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(sanitize("  padded  "), "padded");
        assert_eq!(sanitize("\n\ninner kept\n\n"), "inner kept");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain",
            "  padded  ",
            "tab\there",
            "crlf\r\nline",
            "mix\t\r\n of \r everything\t",
            "",
            "\t\r\n",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_interior_newlines_preserved() {
        assert_eq!(sanitize("a\nb"), "a\nb");
    }

    #[test]
    fn test_escape_latex_specials() {
        assert_eq!(escape_latex("50% & $10"), r"50\% \& \$10");
        assert_eq!(escape_latex("snake_case"), r"snake\_case");
        assert_eq!(escape_latex("a{b}c"), r"a\{b\}c");
    }

    #[test]
    fn test_escape_latex_backslash() {
        assert_eq!(escape_latex(r"a\b"), r"a\textbackslash{}b");
    }
}
