//! Error handling for the scriptex CLI.
//!
//! `CliError` is the top-level type returned by commands. Domain errors
//! (`ConfigError`, the extractor's `ExtractorError`) convert into it via
//! `#[from]`, and [`cli_error_to_miette`] turns it into a report at the edge.

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extraction errors (only raised by the `error` unterminated policy)
    #[error("Extraction error: {0}")]
    Extract(#[from] scriptex::ExtractorError),

    /// Input file not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Check the --config path or remove the flag to use defaults", .0.display())]
    NotFound(PathBuf),

    /// Config file exists but could not be read or parsed
    #[error("Failed to parse config file {}: {message}", .path.display())]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Reader or parser message
        message: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Io(io_err) => {
                CliError::Custom(format!("{}: {}", path.as_ref().display(), io_err))
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptex::ExtractorError;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("scriptex.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("scriptex.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "unterminated".to_string(),
            value: "keep".to_string(),
            hint: "Must be 'drop', 'emit' or 'error'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'unterminated'"));
        assert!(msg.contains("keep"));
        assert!(msg.contains("Must be 'drop'"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("x.json")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_extractor_error() {
        let cli_err: CliError = ExtractorError::UnclosedScriptTag { position: 42 }.into();
        assert!(matches!(cli_err, CliError::Extract(_)));
        assert!(cli_err.to_string().contains("byte position 42"));
    }

    #[test]
    fn test_result_ext_with_path_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/page.html").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert!(err.to_string().contains("/test/page.html"));
    }

    #[test]
    fn test_result_ext_with_path_other_io_error() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("/root/secret.html").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/root/secret.html"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));

        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::NotFound(PathBuf::from("test.json")));

        let err = result.context("Failed to load settings").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load settings: "));
    }
}
