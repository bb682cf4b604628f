//! Smithery tool configuration.
//!
//! Pure configuration types with defaults matching the stock Smithery CLI
//! invocation (`npx -y @smithery/cli ...`).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default client passed to `install --client`.
pub const DEFAULT_CLIENT: &str = "claude";

/// Package run for `install`.
pub const DEFAULT_CLI_PACKAGE: &str = "@smithery/cli";

/// Package run for `inspect`.
pub const DEFAULT_INSPECT_PACKAGE: &str = "@smithery/cli@latest";

/// Model used when none is configured.
pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-pro";

/// Environment variable holding the model API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Configuration consumed by the Smithery tools at construction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SmitheryConfig {
    /// Client used by `smithery_install` when the caller names none.
    pub default_client: String,

    /// Program and leading arguments that run a package (e.g. `npx -y`).
    pub invoker: Vec<String>,

    /// Package providing the `install` subcommand.
    pub cli_package: String,

    /// Package providing the `inspect` subcommand.
    pub inspect_package: String,

    /// Kill external commands that run longer than this. `None` waits forever.
    pub command_timeout_secs: Option<u64>,
}

impl Default for SmitheryConfig {
    fn default() -> Self {
        Self {
            default_client: DEFAULT_CLIENT.to_string(),
            invoker: vec!["npx".to_string(), "-y".to_string()],
            cli_package: DEFAULT_CLI_PACKAGE.to_string(),
            inspect_package: DEFAULT_INSPECT_PACKAGE.to_string(),
            command_timeout_secs: None,
        }
    }
}

impl SmitheryConfig {
    /// Set the default install client.
    #[must_use]
    pub fn with_default_client(mut self, client: impl Into<String>) -> Self {
        self.default_client = client.into();
        self
    }

    /// Set the command timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.command_timeout_secs = Some(secs);
        self
    }

    /// Effective command timeout.
    #[must_use]
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Default client cannot be empty")]
    EmptyClient,

    #[error("Invoker must name a program (e.g. [\"npx\", \"-y\"])")]
    EmptyInvoker,

    #[error("Package for '{0}' cannot be empty")]
    EmptyPackage(&'static str),

    #[error("Command timeout must be at least 1 second")]
    InvalidTimeout,
}

/// Validate a configuration.
pub fn validate_config(config: &SmitheryConfig) -> Result<(), SettingsError> {
    if config.default_client.trim().is_empty() {
        return Err(SettingsError::EmptyClient);
    }

    if config.invoker.first().is_none_or(|program| program.trim().is_empty()) {
        return Err(SettingsError::EmptyInvoker);
    }

    if config.cli_package.trim().is_empty() {
        return Err(SettingsError::EmptyPackage("install"));
    }

    if config.inspect_package.trim().is_empty() {
        return Err(SettingsError::EmptyPackage("inspect"));
    }

    if config.command_timeout_secs == Some(0) {
        return Err(SettingsError::InvalidTimeout);
    }

    Ok(())
}
