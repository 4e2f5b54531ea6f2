use crate::core::matcher::Grammar;
use crate::core::report::OutputFormat;
use crate::utils::error::{PostcodeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub validation: Option<ValidationSection>,
    pub input: Option<InputSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSection {
    pub grammar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    pub path: Option<String>,
    pub column: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub fail_on_invalid: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PostcodeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment value; unknown names are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn grammar(&self) -> Result<Option<Grammar>> {
        let Some(raw) = self.validation.as_ref().and_then(|v| v.grammar.as_deref()) else {
            return Ok(None);
        };
        raw.parse::<Grammar>()
            .map(Some)
            .map_err(|reason| PostcodeError::InvalidConfigValueError {
                field: "validation.grammar".to_string(),
                value: raw.to_string(),
                reason,
            })
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    pub fn column(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.column.as_deref())
    }

    pub fn delimiter(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.delimiter.as_deref())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn fail_on_invalid(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.fail_on_invalid)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.grammar()?;
        self.output_format()?;

        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(column) = self.column() {
            validation::validate_non_empty_string("input.column", column)?;
        }
        if let Some(delimiter) = self.delimiter() {
            validation::validate_delimiter("input.delimiter", delimiter)?;
        }
        Ok(())
    }
}
