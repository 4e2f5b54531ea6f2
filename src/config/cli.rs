use crate::config::{CheckSettings, TomlConfig};
use crate::core::matcher::Grammar;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "postcode")]
#[command(about = "Validate and format UK postcodes")]
pub struct CliConfig {
    /// Postcodes to check
    pub postcodes: Vec<String>,

    #[arg(short, long, help = "Read postcodes from a file, one per line")]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Read this column from a delimited input file with a header row")]
    pub column: Option<String>,

    #[arg(long, help = "Field delimiter used with --column (\\t for tab)")]
    pub delimiter: Option<String>,

    #[arg(short, long, value_enum)]
    pub grammar: Option<Grammar>,

    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Exit with status 2 when any postcode is invalid")]
    pub fail_on_invalid: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the optional config file with command-line flags; flags win.
    pub fn resolve(&self) -> Result<CheckSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                CheckSettings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => CheckSettings::default(),
        };

        settings.postcodes = self.postcodes.clone();
        if let Some(grammar) = self.grammar {
            settings.grammar = grammar;
        }
        if let Some(input) = &self.input {
            settings.input_path = Some(input.clone());
        }
        if let Some(column) = &self.column {
            settings.column = Some(column.clone());
        }
        if let Some(delimiter) = &self.delimiter {
            settings.delimiter = validation::validate_delimiter("--delimiter", delimiter)?;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        settings.fail_on_invalid |= self.fail_on_invalid;

        settings.validate()?;
        Ok(settings)
    }
}
