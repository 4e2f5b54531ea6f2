//! Structural postcode matching.
//!
//! Two grammars are available. [`Grammar::Strict`] requires a complete
//! outward + inward postcode and is anchored at both ends. [`Grammar::Legacy`]
//! keeps the older start-anchored alternation, where three of the four
//! branches accept a bare outward code and ignore whatever follows it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

const STRICT_PATTERN: &str = r"^[A-Za-z]{1,2}[0-9][A-Za-z0-9]?\s?[0-9][A-Za-z]{2}$";

const LEGACY_PATTERN: &str = concat!(
    r"^(?:[A-Za-z][A-Za-z][0-9][A-Za-z])",
    r"|^(?:[A-Za-z][A-Za-z][0-9]{1,2})",
    r"|^(?:[A-Za-z][0-9][A-Za-z])",
    r"|^(?:[A-Za-z][0-9]{1,2}\s?[0-9][A-Za-z]{2})$",
);

static STRICT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRICT_PATTERN).expect("strict postcode pattern compiles"));

static LEGACY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEGACY_PATTERN).expect("legacy postcode pattern compiles"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Full postcode only, anchored at start and end.
    #[default]
    Strict,
    /// Start-anchored alternation; outward-only prefixes pass.
    Legacy,
}

impl Grammar {
    pub fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::Strict => "strict",
            Grammar::Legacy => "legacy",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Strict => &STRICT_REGEX,
            Grammar::Legacy => &LEGACY_REGEX,
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Grammar::Strict),
            "legacy" => Ok(Grammar::Legacy),
            other => Err(format!("unknown grammar '{}'", other)),
        }
    }
}

/// Checks `text` against the default grammar. Case-insensitive, never fails.
pub fn is_valid_postcode(text: &str) -> bool {
    Grammar::default().is_match(text)
}

pub fn is_valid_postcode_with(text: &str, grammar: Grammar) -> bool {
    grammar.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_full_postcodes() {
        for code in ["W1A0AX", "M11AE", "B338TH", "CR26XH", "DN551PT", "G58 1SB", "ec1a 1bb"] {
            assert!(is_valid_postcode(code), "{} should be valid", code);
        }
    }

    #[test]
    fn test_strict_rejects_garbage() {
        for code in ["", "INVALID", "TKCA 1ZZ", "A00BBB", "GIR 0AA", "123456", "W1A", "M1  1AE", " M11AE"] {
            assert!(!is_valid_postcode(code), "{:?} should be invalid", code);
        }
    }

    #[test]
    fn test_legacy_accepts_outward_prefixes() {
        assert!(is_valid_postcode_with("W1A", Grammar::Legacy));
        assert!(is_valid_postcode_with("AB12XYZ", Grammar::Legacy));
        assert!(is_valid_postcode_with("SW1A trailing", Grammar::Legacy));
        assert!(!is_valid_postcode_with("W1A", Grammar::Strict));
        assert!(!is_valid_postcode_with("AB12XYZ", Grammar::Strict));
    }

    #[test]
    fn test_legacy_inward_branch_is_end_anchored() {
        assert!(is_valid_postcode_with("M1 1AE", Grammar::Legacy));
        assert!(!is_valid_postcode_with("A00BBB", Grammar::Legacy));
        assert!(!is_valid_postcode_with("GIR 0AA", Grammar::Legacy));
        assert!(!is_valid_postcode_with("", Grammar::Legacy));
    }

    #[test]
    fn test_letters_are_ascii_only() {
        // Kelvin sign case-folds to 'k' under Unicode rules.
        assert!(!is_valid_postcode("\u{212A}1 1AE"));
        assert!(!is_valid_postcode("\u{df}11AE"));
        assert!(!is_valid_postcode("\u{131}11AE"));
        assert!(!is_valid_postcode_with("\u{df}11AE", Grammar::Legacy));
    }

    #[test]
    fn test_grammar_from_str() {
        assert_eq!("Strict".parse::<Grammar>().unwrap(), Grammar::Strict);
        assert_eq!(" legacy ".parse::<Grammar>().unwrap(), Grammar::Legacy);
        assert!("loose".parse::<Grammar>().is_err());
    }
}
