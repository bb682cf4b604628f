//! CLI-specific error types and mappings.
//!
//! Maps agent and configuration failures to exit codes and user-facing
//! messages.

use smithery_agent::AgentError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Agent error that is not a configuration problem.
    #[error("{0}")]
    Agent(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (malformed YAML, missing API key).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal input error.
    #[error("Input error: {0}")]
    Input(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Agent(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Input(_) => 66,    // EX_NOINPUT
        }
    }
}

impl From<AgentError> for CliError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::MissingApiKey { .. } | AgentError::Config(_) => Self::Config(err.to_string()),
            AgentError::Planning(_) | AgentError::Registration(_) => Self::Agent(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Input(err.to_string())
    }
}
