use crate::core::matcher::Grammar;
use thiserror::Error;

/// Raised when a candidate cannot be put into canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid postcode: {input:?}")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text as it was handed to the formatter.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Formats `text` into canonical `OUTWARD INWARD` form under the default grammar.
///
/// ```
/// use uk_postcode::format_postcode;
///
/// assert_eq!(format_postcode("  cr26xh ").unwrap(), "CR2 6XH");
/// assert!(format_postcode("INVALID").is_err());
/// ```
pub fn format_postcode(text: &str) -> Result<String, FormatError> {
    format_postcode_with(text, Grammar::default())
}

pub fn format_postcode_with(text: &str, grammar: Grammar) -> Result<String, FormatError> {
    let postcode = text.trim().to_ascii_uppercase();
    if !grammar.is_match(&postcode) {
        return Err(FormatError::new(text));
    }

    // The inward code is always the last three characters.
    let inward_start = match postcode.char_indices().rev().nth(2) {
        Some((idx, _)) if idx > 0 => idx,
        _ => return Err(FormatError::new(text)),
    };
    let (head, inward) = postcode.split_at(inward_start);
    let outward = head.strip_suffix(char::is_whitespace).unwrap_or(head);
    if outward.is_empty() || !is_inward_code(inward) {
        return Err(FormatError::new(text));
    }

    Ok(format!("{} {}", outward, inward))
}

/// One digit followed by two ASCII letters.
fn is_inward_code(text: &str) -> bool {
    matches!(
        text.as_bytes(),
        [digit, first, second]
            if digit.is_ascii_digit() && first.is_ascii_alphabetic() && second.is_ascii_alphabetic()
    )
}
