//! Agent construction and planning errors.

use smithery_core::{PlannerError, SettingsError, ToolError};
use thiserror::Error;

/// Errors raised by the agent shell.
///
/// Tool failures never surface here; they are reported inside the
/// execution report as data.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No API key was passed and the environment variable is unset or empty.
    #[error("API key must be provided or set in {env_var} environment variable")]
    MissingApiKey { env_var: &'static str },

    /// The Smithery configuration is unusable.
    #[error("Invalid Smithery configuration: {0}")]
    Config(#[from] SettingsError),

    /// The planner failed to produce a plan.
    #[error(transparent)]
    Planning(#[from] PlannerError),

    /// A tool could not be registered (duplicate name).
    #[error("Failed to register tool: {0}")]
    Registration(#[from] ToolError),
}
