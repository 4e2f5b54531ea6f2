use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostcodeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' not found in input header")]
    MissingColumnError { column: String },
}

impl PostcodeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PostcodeError::IoError(e) => format!("Could not read or write a file: {}", e),
            PostcodeError::CsvError(e) => format!("Could not parse the input file: {}", e),
            PostcodeError::SerializationError(e) => format!("Could not encode the report: {}", e),
            PostcodeError::ConfigError { message } => format!("Configuration problem: {}", message),
            PostcodeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PostcodeError::MissingColumnError { column } => {
                format!("The input has no '{}' column", column)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PostcodeError::IoError(_) => "Check that the path exists and is readable",
            PostcodeError::CsvError(_) => "Check the delimiter and that every row has the same number of fields",
            PostcodeError::SerializationError(_) => "Try a different output format",
            PostcodeError::ConfigError { .. } => "Fix the configuration file syntax",
            PostcodeError::InvalidConfigValueError { .. } => "Correct the setting named above",
            PostcodeError::MissingColumnError { .. } => "Pass the exact header name with --column",
        }
    }
}

pub type Result<T> = std::result::Result<T, PostcodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = PostcodeError::MissingColumnError {
            column: "postcode".to_string(),
        };
        assert!(err.to_string().contains("postcode"));
        assert!(err.recovery_suggestion().contains("--column"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: PostcodeError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "IO error: gone");
        assert_eq!(err.user_friendly_message(), "Could not read or write a file: gone");
    }
}
