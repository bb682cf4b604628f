//! Captured output of an external command invocation.

use serde::{Deserialize, Serialize};

/// Output of a single external command.
///
/// Produced once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Captured standard output, decoded as UTF-8 (lossy).
    pub stdout: String,
    /// Captured standard error, decoded as UTF-8 (lossy).
    pub stderr: String,
    /// Process exit code. `-1` when the process was terminated by a signal.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a new command result.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Whether the command exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}
