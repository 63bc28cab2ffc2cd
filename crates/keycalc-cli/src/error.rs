//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Config file that is not valid YAML for the engine
    #[error("Invalid config file {path}: {source}")]
    Yaml {
        /// File that failed to parse
        path: String,
        /// Parser error
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("missing file");
        assert_eq!(err.to_string(), "Configuration error: missing file");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad filter");
        assert!(err.to_string().contains("bad filter"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_yaml_error_names_path() {
        let source = serde_yaml_ng::from_str::<u32>("[1, 2").unwrap_err();
        let err = CliError::Yaml {
            path: "calc.yaml".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid config file calc.yaml"));
    }
}
