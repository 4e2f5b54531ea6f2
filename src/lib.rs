//! Format validation and canonical formatting of UK postcodes.
//!
//! ```
//! use uk_postcode::{format_postcode, is_valid_postcode};
//!
//! assert!(is_valid_postcode("W1A0AX"));
//! assert_eq!(format_postcode("W1A0AX").unwrap(), "W1A 0AX");
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{CheckSettings, TomlConfig};
pub use crate::core::batch::{CheckReport, CheckResult, PostcodeChecker};
pub use crate::core::formatter::{format_postcode, format_postcode_with, FormatError};
pub use crate::core::matcher::{is_valid_postcode, is_valid_postcode_with, Grammar};
pub use crate::core::report::{render_report, OutputFormat};
pub use domain::Postcode;
pub use utils::error::{PostcodeError, Result};
