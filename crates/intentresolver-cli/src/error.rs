//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use intentresolver_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The package manager refused or failed a request.
    #[error("Platform error: {0}")]
    Platform(String),

    /// Malformed scenario file.
    #[error("Invalid scenario: {0}")]
    Scenario(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: Any failure that is not a `CliError`
    /// - 2: Invalid arguments
    /// - 65: Bad input data (EX_DATAERR)
    /// - 69: Service unavailable (EX_UNAVAILABLE)
    /// - 74: IO error (EX_IOERR)
    /// - 78: Configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Scenario(_) => 65,
            Self::Platform(_) => 69,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Platform(platform_err) => Self::Platform(platform_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Scenario(err.to_string())
    }
}
