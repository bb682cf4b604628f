//! Install tool.
//!
//! Runs `smithery install` for a server and reports the outcome as data:
//! a failing command yields `status: "failed"`, never an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use smithery_core::{CommandRunner, SmitheryConfig, Tool, ToolError, parse_arguments, to_value};
use smithery_runtime::{SmitheryCli, render_command};
use std::sync::Arc;
use tracing::{info, warn};

pub const INSTALL_TOOL_NAME: &str = "smithery_install";

/// Outcome of an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallStatus {
    Installed,
    Failed,
}

/// Result of `smithery_install`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResult {
    pub server: String,
    pub client: String,
    pub status: InstallStatus,
    /// Command stdout, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Failure description, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The command that was run, space-joined.
    pub command: String,
}

impl InstallResult {
    fn installed(server: &str, client: String, output: String, command: String) -> Self {
        Self {
            server: server.to_string(),
            client,
            status: InstallStatus::Installed,
            output: Some(output),
            error: None,
            command,
        }
    }

    fn failed(server: &str, client: String, error: String, command: String) -> Self {
        Self {
            server: server.to_string(),
            client,
            status: InstallStatus::Failed,
            output: None,
            error: Some(error),
            command,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InstallArgs {
    server_name: String,
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    config_file: Option<String>,
}

/// Install an MCP server using the Smithery CLI.
pub struct InstallTool {
    runner: Arc<dyn CommandRunner>,
    cli: SmitheryCli,
    default_client: String,
}

impl InstallTool {
    /// Create the tool from configuration and an injected command runner.
    pub fn new(config: &SmitheryConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            cli: SmitheryCli::from_config(config),
            default_client: config.default_client.clone(),
        }
    }

    /// Client used when the caller names none.
    pub fn default_client(&self) -> &str {
        &self.default_client
    }

    /// Install `server_name` for `client` (or the default client).
    ///
    /// Empty `client` or `config_file` values count as absent.
    pub async fn execute(
        &self,
        server_name: &str,
        client: Option<&str>,
        config_file: Option<&str>,
    ) -> InstallResult {
        let client = client
            .filter(|c| !c.is_empty())
            .unwrap_or(self.default_client.as_str())
            .to_string();
        let config_file = config_file.filter(|f| !f.is_empty());

        let argv = self.cli.install_argv(server_name, &client, config_file);
        let command = render_command(&argv);

        info!(server_name = %server_name, client = %client, "Installing MCP server");

        match self.runner.run(&argv).await {
            Ok(result) => {
                info!(server_name = %server_name, "MCP server installed");
                InstallResult::installed(server_name, client, result.stdout, command)
            }
            Err(e) => {
                warn!(server_name = %server_name, error = %e, "MCP server installation failed");
                InstallResult::failed(server_name, client, e.to_string(), command)
            }
        }
    }
}

impl std::fmt::Debug for InstallTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallTool")
            .field("cli", &self.cli)
            .field("default_client", &self.default_client)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for InstallTool {
    fn name(&self) -> &str {
        INSTALL_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Install an MCP server using Smithery CLI"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "server_name": { "type": "string", "description": "Server to install, e.g. \"exa\" or \"@org/server-name\"" },
                "client": { "type": "string", "description": "Target client, e.g. \"claude\", \"cursor\", \"cline\"" },
                "config_file": { "type": "string", "description": "Optional path to a configuration file" }
            },
            "required": ["server_name"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: InstallArgs = parse_arguments(INSTALL_TOOL_NAME, arguments)?;
        let result = self
            .execute(
                &args.server_name,
                args.client.as_deref(),
                args.config_file.as_deref(),
            )
            .await;
        to_value(INSTALL_TOOL_NAME, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockRunner;
    use smithery_core::{CommandError, CommandResult};

    fn tool_with(runner: MockRunner) -> InstallTool {
        InstallTool::new(&SmitheryConfig::default(), Arc::new(runner))
    }

    #[tokio::test]
    async fn test_success_reports_installed() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|argv| argv.join(" ") == "npx -y @smithery/cli install exa --client claude")
            .times(1)
            .returning(|_| Ok(CommandResult::new("Installed exa", "", 0)));

        let result = tool_with(runner).execute("exa", None, None).await;

        assert_eq!(result.status, InstallStatus::Installed);
        assert_eq!(result.client, "claude");
        assert_eq!(result.output.as_deref(), Some("Installed exa"));
        assert_eq!(result.error, None);
        assert_eq!(result.command, "npx -y @smithery/cli install exa --client claude");
    }

    #[tokio::test]
    async fn test_non_zero_exit_reports_failed() {
        let mut runner = MockRunner::new();
        runner.expect_run().returning(|_| {
            Err(CommandError::Failed {
                exit_code: Some(1),
                stderr: "server not found in registry".to_string(),
            })
        });

        let result = tool_with(runner)
            .execute("nope", Some("cursor"), Some("cfg.json"))
            .await;

        assert_eq!(result.status, InstallStatus::Failed);
        assert_eq!(result.client, "cursor");
        assert_eq!(
            result.error.as_deref(),
            Some("Command failed: server not found in registry")
        );
        assert_eq!(
            result.command,
            "npx -y @smithery/cli install nope --client cursor --config cfg.json"
        );
    }

    #[tokio::test]
    async fn test_empty_client_falls_back_to_default() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .withf(|argv| argv.contains(&"windsurf".to_string()))
            .returning(|_| Ok(CommandResult::new("", "", 0)));

        let config = SmitheryConfig::default().with_default_client("windsurf");
        let tool = InstallTool::new(&config, Arc::new(runner));
        let result = tool.execute("exa", Some(""), Some("")).await;

        assert_eq!(result.client, "windsurf");
        assert!(!result.command.contains("--config"));
    }

    #[tokio::test]
    async fn test_call_serializes_failure_without_output() {
        let mut runner = MockRunner::new();
        runner.expect_run().returning(|_| {
            Err(CommandError::Failed {
                exit_code: Some(2),
                stderr: "boom".to_string(),
            })
        });

        let output = tool_with(runner)
            .call(json!({"server_name": "exa"}))
            .await
            .unwrap();

        assert_eq!(output["status"], "failed");
        assert_eq!(output["error"], "Command failed: boom");
        assert!(output.get("output").is_none());
    }
}
