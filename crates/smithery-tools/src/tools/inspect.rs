//! Inspect tool.
//!
//! Runs `smithery inspect` for a server. The output parser only detects
//! lines that mention a tool or function and emits a placeholder descriptor
//! for each; it does not extract real names or descriptions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use smithery_core::{CommandRunner, SmitheryConfig, Tool, ToolError, parse_arguments, to_value};
use smithery_runtime::{SmitheryCli, render_command};
use std::sync::Arc;
use tracing::{debug, warn};

pub const INSPECT_TOOL_NAME: &str = "smithery_inspect";

const PLACEHOLDER_NAME: &str = "extracted_tool_name";
const PLACEHOLDER_DESCRIPTION: &str = "Tool description from output";

/// A tool detected in inspection output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredTool {
    pub name: String,
    pub description: String,
}

/// Outcome of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectStatus {
    Success,
    Failed,
}

/// Result of `smithery_inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectResult {
    pub server: String,
    pub status: InspectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<DiscoveredTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Detect tool lines in `smithery inspect` output.
///
/// One placeholder per line containing `tool:` or `function:`
/// (case-insensitive).
pub fn parse_tools_from_output(output: &str) -> Vec<DiscoveredTool> {
    output
        .trim()
        .lines()
        .filter(|line| {
            let line = line.to_lowercase();
            line.contains("tool:") || line.contains("function:")
        })
        .map(|_| DiscoveredTool {
            name: PLACEHOLDER_NAME.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct InspectArgs {
    server_name: String,
}

/// Inspect an MCP server to see its tools and capabilities.
pub struct InspectTool {
    runner: Arc<dyn CommandRunner>,
    cli: SmitheryCli,
}

impl InspectTool {
    /// Create the tool from configuration and an injected command runner.
    pub fn new(config: &SmitheryConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            cli: SmitheryCli::from_config(config),
        }
    }

    /// Inspect `server_name`.
    pub async fn execute(&self, server_name: &str) -> InspectResult {
        let argv = self.cli.inspect_argv(server_name);
        debug!(command = %render_command(&argv), "Inspecting MCP server");

        match self.runner.run(&argv).await {
            Ok(result) => {
                let tools = parse_tools_from_output(&result.stdout);
                debug!(server_name = %server_name, tool_count = tools.len(), "MCP server inspected");
                InspectResult {
                    server: server_name.to_string(),
                    status: InspectStatus::Success,
                    output: Some(result.stdout),
                    tools: Some(tools),
                    error: None,
                }
            }
            Err(e) => {
                warn!(server_name = %server_name, error = %e, "MCP server inspection failed");
                InspectResult {
                    server: server_name.to_string(),
                    status: InspectStatus::Failed,
                    output: None,
                    tools: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl std::fmt::Debug for InspectTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectTool")
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for InspectTool {
    fn name(&self) -> &str {
        INSPECT_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Inspect an MCP server to see its available tools and capabilities"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "server_name": { "type": "string", "description": "Name of the server to inspect" }
            },
            "required": ["server_name"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: InspectArgs = parse_arguments(INSPECT_TOOL_NAME, arguments)?;
        to_value(INSPECT_TOOL_NAME, &self.execute(&args.server_name).await)
    }
}
