use crate::core::formatter::{format_postcode_with, FormatError};
use crate::core::matcher::Grammar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A postcode already in canonical `OUTWARD INWARD` form.
///
/// Always built through the strict grammar, so the inward code is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode {
    canonical: String,
}

impl Postcode {
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let canonical = format_postcode_with(text, Grammar::Strict)?;
        Ok(Self { canonical })
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Area and district, e.g. `SW1A`.
    pub fn outward(&self) -> &str {
        self.split().0
    }

    /// Sector and unit, e.g. `1AA`.
    pub fn inward(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // Canonical form holds exactly one space.
        self.canonical
            .split_once(' ')
            .unwrap_or((self.canonical.as_str(), ""))
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Postcode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Postcode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Postcode> for String {
    fn from(postcode: Postcode) -> Self {
        postcode.canonical
    }
}

impl AsRef<str> for Postcode {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}
