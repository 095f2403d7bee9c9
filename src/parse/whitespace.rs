use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// How the text of a menu cell is tidied after it has been trimmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TextCleanup {
    /// Keep line breaks but drop lines that only hold whitespace.
    #[default]
    EmptyLines,
    /// Fold every whitespace run into a single space.
    Collapse,
}

impl TextCleanup {
    pub fn apply(self, text: &str) -> String {
        let text = text.trim();
        match self {
            Self::EmptyLines => remove_empty_lines(text).into_owned(),
            Self::Collapse => remove_excess_whitespace(text).into_owned(),
        }
    }
}

/// Replaces a newline, a whitespace-only line and another newline with a single newline.
pub fn remove_empty_lines(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\n\s+\n").expect("regex should be valid"));
    re.replace_all(s, "\n")
}

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_empty_lines() {
        assert_eq!(remove_empty_lines("Puuro\n   \nLeipä"), "Puuro\nLeipä");
        assert_eq!(remove_empty_lines("Puuro\n\n\nLeipä"), "Puuro\nLeipä");
        assert_eq!(remove_empty_lines("Puuro\n \t\n  \nLeipä"), "Puuro\nLeipä");
        // two adjacent newlines have nothing between them to remove
        assert_eq!(remove_empty_lines("Puuro\n\nLeipä"), "Puuro\n\nLeipä");
        assert!(matches!(remove_empty_lines("Puuro"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_remove_excess_whitespace() {
        assert_eq!(
            remove_excess_whitespace("Kalakeitto\n   Ruisleipä  ja voi"),
            "Kalakeitto Ruisleipä ja voi"
        );
        assert_eq!(remove_excess_whitespace("a b"), "a b");
        assert_eq!(
            remove_excess_whitespace("Riisipuuro\nMustikkakeitto"),
            "Riisipuuro Mustikkakeitto"
        );
    }

    #[test]
    fn test_cleanup_trims_first() {
        let raw = "\n   Kaurapuuro\n      \n   Marjakeitto\n  ";
        assert_eq!(TextCleanup::EmptyLines.apply(raw), "Kaurapuuro\n   Marjakeitto");
        assert_eq!(TextCleanup::Collapse.apply(raw), "Kaurapuuro Marjakeitto");
        assert_eq!(TextCleanup::EmptyLines.apply("  \u{a0} "), "");
    }
}
