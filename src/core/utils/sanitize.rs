use std::sync::LazyLock;

use regex::Regex;

use crate::utils::capitalize_first;

/// Runs of characters that cannot appear in a generated identifier.
static DISALLOWED_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\.@#!`~$%^&*()+={}:;'"<>?,\[\]-]+"#).expect("disallowed-run regex is valid")
});

const REPLACEMENT: &str = "_";

/// Replaces every run of disallowed characters with a single underscore and trims
/// surrounding whitespace.
///
/// ```
/// use resgen::core::sanitize;
///
/// assert_eq!(sanitize("person.firstname"), "person_firstname");
/// assert_eq!(sanitize("***"), "_");
/// assert_eq!(sanitize("  a_a    "), "a_a");
/// ```
pub fn sanitize(text: &str) -> String {
    DISALLOWED_RUN_REGEX
        .replace_all(text, REPLACEMENT)
        .trim()
        .to_string()
}

/// Sanitized and uppercased, as used for key constants.
pub fn constant_identifier(key: &str) -> String {
    sanitize(key).to_uppercase()
}

/// Title-cases every `_`-separated part of the sanitized text and joins them.
///
/// `default-resources` becomes `DefaultResources`.
pub fn type_identifier(text: &str) -> String {
    sanitize(text)
        .split(REPLACEMENT)
        .map(capitalize_first)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_replaces_runs_with_one_underscore() {
        assert_eq!(sanitize("person.firstname"), "person_firstname");
        assert_eq!(sanitize("a..b"), "a_b");
        assert_eq!(sanitize("a.-/b"), "a_b");
        assert_eq!(sanitize("menu[0].label"), "menu_0_label");
        assert_eq!(sanitize("error:{code}"), "error_code_");
        assert_eq!(sanitize(r#"say "hi""#), "say _hi_");
        assert_eq!(sanitize(r"win\path"), "win_path");
    }

    #[test]
    fn test_only_disallowed_characters() {
        assert_eq!(sanitize("***"), "_");
        assert_eq!(sanitize("@#!`~$%^&*()+={}:;'\"<>?,[]-"), "_");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  a_a    "), "a_a");
        assert_eq!(sanitize("\tlabel\n"), "label");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for text in [
            "person.firstname",
            "***",
            "  a_a    ",
            "a . b",
            "",
            "plain",
            "x-y-z",
            "über.straße",
        ] {
            let once = sanitize(text);
            assert_eq!(sanitize(&once), once, "input: {text:?}");
        }
    }

    #[test]
    fn test_constant_identifier() {
        assert_eq!(constant_identifier("person.firstname"), "PERSON_FIRSTNAME");
        assert_eq!(constant_identifier("***"), "_");
        assert_eq!(constant_identifier("  a_a    "), "A_A");
        assert_eq!(constant_identifier("button-label"), "BUTTON_LABEL");
    }

    #[test]
    fn test_type_identifier() {
        assert_eq!(type_identifier("resources"), "Resources");
        assert_eq!(type_identifier("default-resources"), "DefaultResources");
        assert_eq!(type_identifier("my.labels"), "MyLabels");
        assert_eq!(type_identifier("Labels"), "Labels");
    }
}
