//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// No sentence to style
    EmptyInput,
    /// Some input lines could not be styled
    StylingFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EmptyInput => write!(f, "No sentences to style"),
            CliError::StylingFailed { failed, total } => {
                write!(f, "Failed to style {failed} of {total} sentences")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("sentences.txt".to_string());
        assert_eq!(error.to_string(), "File not found: sentences.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `colour`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field `colour`"
        );
    }

    #[test]
    fn test_styling_failed_display() {
        let error = CliError::StylingFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.to_string(), "Failed to style 2 of 5 sentences");
    }

    #[test]
    fn test_cli_error_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::EmptyInput.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "No sentences to style");
    }
}
