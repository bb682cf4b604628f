//! Command runner trait definition.
//!
//! This port defines the interface for running external CLI commands.
//! Implementations handle all process details internally.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::CommandResult;

/// Errors that can occur while running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The argv vector was empty.
    #[error("Command is empty")]
    EmptyCommand,

    /// The program could not be started.
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status.
    #[error("Command failed: {stderr}")]
    Failed {
        /// Exit code, if the process exited normally.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// The process did not finish within the configured timeout.
    #[error("Command timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    /// Reading the process output failed.
    #[error("I/O error while waiting for command: {0}")]
    Io(#[from] std::io::Error),
}

/// Runner for external CLI commands.
///
/// Commands are passed as a discrete argv vector, never as a shell string,
/// so arguments are not subject to shell interpolation.
///
/// # Design Rules
///
/// - Non-zero exit is reported as `CommandError::Failed` carrying stderr
/// - No retry; callers decide how to interpret failure
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv[0]` with the remaining elements as arguments.
    async fn run(&self, argv: &[String]) -> Result<CommandResult, CommandError>;
}
