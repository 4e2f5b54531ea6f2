#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::matcher::Grammar;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

pub use toml_config::TomlConfig;

/// Fully resolved settings for one checking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub grammar: Grammar,
    pub postcodes: Vec<String>,
    pub input_path: Option<PathBuf>,
    pub column: Option<String>,
    pub delimiter: u8,
    pub output: OutputFormat,
    pub fail_on_invalid: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            grammar: Grammar::default(),
            postcodes: Vec::new(),
            input_path: None,
            column: None,
            delimiter: b',',
            output: OutputFormat::default(),
            fail_on_invalid: false,
        }
    }
}

impl CheckSettings {
    /// Starts from defaults and applies the file config on top.
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let mut settings = Self::default();
        if let Some(grammar) = config.grammar()? {
            settings.grammar = grammar;
        }
        if let Some(path) = config.input_path() {
            settings.input_path = Some(PathBuf::from(path));
        }
        settings.column = config.column().map(str::to_string);
        if let Some(delimiter) = config.delimiter() {
            settings.delimiter = validation::validate_delimiter("input.delimiter", delimiter)?;
        }
        if let Some(format) = config.output_format()? {
            settings.output = format;
        }
        if let Some(fail) = config.fail_on_invalid() {
            settings.fail_on_invalid = fail;
        }
        Ok(settings)
    }
}

impl Validate for CheckSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_path {
            validation::validate_path("input.path", &path.to_string_lossy())?;
        }
        if let Some(column) = &self.column {
            validation::validate_non_empty_string("input.column", column)?;
        }
        if self.column.is_some() && self.input_path.is_none() {
            return Err(crate::utils::error::PostcodeError::ConfigError {
                message: "a column was given but there is no input file to read it from"
                    .to_string(),
            });
        }
        Ok(())
    }
}
