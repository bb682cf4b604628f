//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Agent configuration file (YAML)
//! - Process command runner (via smithery-runtime)
//! - Agent shell with the offline keyword planner (via smithery-agent)
//!
//! Command handlers receive the composed [`CliContext`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smithery_agent::{SmitheryAgent, create_agent};
use smithery_core::{CommandRunner, SmitheryConfig};
use smithery_runtime::ProcessCommandRunner;
use tracing::{debug, info};

use crate::error::CliError;
use crate::planner::KeywordPlanner;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "agent_config.yaml";

const DEFAULT_AGENT_NAME: &str = "smithery-mcp-agent";

/// `agent:` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSection {
    pub name: String,
    pub model: Option<String>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            model: None,
        }
    }
}

/// Contents of `agent_config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentFileConfig {
    pub agent: AgentSection,
    pub smithery: SmitheryConfig,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Effective configuration plus its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub file: AgentFileConfig,
    pub source: ConfigSource,
}

/// Read the configuration file at `path`.
///
/// A missing file yields defaults; an unreadable or malformed file is an
/// error.
pub fn load_config(path: &Path) -> Result<LoadedConfig, CliError> {
    if !path.exists() {
        info!(path = %path.display(), "Configuration file not found, using defaults");
        return Ok(LoadedConfig {
            file: AgentFileConfig::default(),
            source: ConfigSource::Defaults,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let file: AgentFileConfig = serde_yaml::from_str(&content)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), agent = %file.agent.name, "Loaded configuration");
    Ok(LoadedConfig {
        file,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the YAML configuration file.
    pub config_path: PathBuf,
    /// Explicit API key (falls back to `GOOGLE_API_KEY`).
    pub api_key: Option<String>,
    /// Model override; beats the configuration file.
    pub model: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            api_key: None,
            model: None,
        }
    }
}

/// Composed context for CLI commands.
pub struct CliContext {
    pub config: LoadedConfig,
    api_key: Option<String>,
    model: Option<String>,
}

impl CliContext {
    /// Smithery tool configuration.
    pub const fn smithery(&self) -> &SmitheryConfig {
        &self.config.file.smithery
    }

    /// Model name: `--model`, then the file, then the built-in default.
    pub fn model(&self) -> Option<&str> {
        self.model
            .as_deref()
            .or(self.config.file.agent.model.as_deref())
    }

    /// Whether a non-empty API key was supplied. The parser already folds
    /// `GOOGLE_API_KEY` into `--api-key`.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Subprocess runner honoring the configured timeout.
    pub fn runner(&self) -> Arc<dyn CommandRunner> {
        Arc::new(ProcessCommandRunner::from_config(self.smithery()))
    }

    /// Build the agent. Fails without an API key.
    pub fn agent(&self) -> Result<SmitheryAgent, CliError> {
        let agent = create_agent(
            self.api_key.clone(),
            self.model(),
            Some(self.smithery().clone()),
            Arc::new(KeywordPlanner::new()),
        )?;
        Ok(agent)
    }
}

impl std::fmt::Debug for CliContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliContext")
            .field("config", &self.config)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Bootstrap the CLI application.
///
/// Loads the configuration file; the agent itself is built lazily by the
/// handlers that need it, so modes without an API key still work.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let loaded = load_config(&config.config_path)?;
    smithery_core::validate_config(&loaded.file.smithery)
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(CliContext {
        config: loaded,
        api_key: config.api_key,
        model: config.model,
    })
}
