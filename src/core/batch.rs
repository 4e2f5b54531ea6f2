use crate::core::formatter::format_postcode_with;
use crate::core::matcher::Grammar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub input: String,
    pub valid: bool,
    pub formatted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub grammar: Grammar,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Validates and formats candidates one at a time; a bad entry never stops the batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostcodeChecker {
    grammar: Grammar,
}

impl PostcodeChecker {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// `valid` comes from the matcher; `formatted` only when a canonical form exists.
    pub fn check(&self, input: &str) -> CheckResult {
        let valid = self.grammar.is_match(input.trim());
        let formatted = match format_postcode_with(input, self.grammar) {
            Ok(formatted) => Some(formatted),
            Err(e) => {
                tracing::debug!("Not formatted: {} ({} grammar)", e, self.grammar);
                None
            }
        };

        CheckResult {
            input: input.to_string(),
            valid,
            formatted,
        }
    }

    pub fn check_all<I, S>(&self, inputs: I) -> CheckReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let results: Vec<CheckResult> = inputs
            .into_iter()
            .map(|input| self.check(input.as_ref()))
            .collect();

        let valid = results.iter().filter(|r| r.valid).count();
        let report = CheckReport {
            grammar: self.grammar,
            total: results.len(),
            valid,
            invalid: results.len() - valid,
            results,
        };

        tracing::info!(
            "Checked {} postcodes: {} valid, {} invalid",
            report.total,
            report.valid,
            report.invalid
        );
        report
    }
}
