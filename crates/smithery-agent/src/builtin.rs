//! Inline function tools owned by the agent shell.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use smithery_core::{ServerRecord, ServerRegistry, ToolError, parse_arguments, to_value};
use smithery_tools::FunctionTool;
use std::collections::BTreeMap;
use tracing::debug;

pub const LIST_SERVERS_TOOL_NAME: &str = "list_installed_servers";
pub const EXECUTE_TOOL_NAME: &str = "execute_mcp_tool";

const EXECUTION_NOTE: &str =
    "In a real implementation, this would connect to the MCP server and execute the tool";

/// Output of `list_installed_servers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstalledServers {
    pub installed_servers: BTreeMap<String, ServerRecord>,
    pub count: usize,
}

/// Output of `execute_mcp_tool` for a known server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpToolInvocation {
    pub server: String,
    pub tool: String,
    pub arguments: Value,
    pub status: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Deserialize)]
struct ExecuteArgs {
    server_name: String,
    tool_name: String,
    #[serde(default)]
    arguments: Value,
}

/// Snapshot of every server the manager has started.
pub async fn list_installed_servers(servers: &ServerRegistry) -> InstalledServers {
    let installed_servers = servers.snapshot().await;
    InstalledServers {
        count: installed_servers.len(),
        installed_servers,
    }
}

/// Forward a tool call to an installed MCP server.
///
/// No MCP client exists yet, so a known server yields a stub record.
pub async fn execute_mcp_tool(
    servers: &ServerRegistry,
    server_name: &str,
    tool_name: &str,
    arguments: Value,
) -> Result<Value, ToolError> {
    if !servers.contains(server_name).await {
        let available = servers.names().await;
        return Ok(json!({
            "error": format!("Server '{server_name}' not installed. Available servers: {available:?}")
        }));
    }

    debug!(server_name = %server_name, tool_name = %tool_name, "Executing MCP tool (stub)");
    let invocation = McpToolInvocation {
        server: server_name.to_string(),
        tool: tool_name.to_string(),
        arguments,
        status: "executed",
        note: EXECUTION_NOTE,
    };
    to_value(EXECUTE_TOOL_NAME, &invocation)
}

/// `list_installed_servers` as a registrable tool.
pub fn list_servers_tool(servers: ServerRegistry) -> FunctionTool {
    FunctionTool::new(
        LIST_SERVERS_TOOL_NAME,
        "List all currently installed MCP servers",
        move |_arguments| {
            let servers = servers.clone();
            async move {
                let listing = list_installed_servers(&servers).await;
                to_value(LIST_SERVERS_TOOL_NAME, &listing)
            }
        },
    )
}

/// `execute_mcp_tool` as a registrable tool.
pub fn execute_tool(servers: ServerRegistry) -> FunctionTool {
    FunctionTool::new(
        EXECUTE_TOOL_NAME,
        "Execute a tool from an installed MCP server",
        move |arguments| {
            let servers = servers.clone();
            async move {
                let args: ExecuteArgs = parse_arguments(EXECUTE_TOOL_NAME, arguments)?;
                execute_mcp_tool(&servers, &args.server_name, &args.tool_name, args.arguments).await
            }
        },
    )
    .with_parameters(json!({
        "type": "object",
        "properties": {
            "server_name": { "type": "string", "description": "Name of the MCP server" },
            "tool_name": { "type": "string", "description": "Name of the tool to execute" },
            "arguments": { "type": "object", "description": "Arguments to pass to the tool" }
        },
        "required": ["server_name", "tool_name"]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithery_core::{ServerConfigMap, Tool};

    #[tokio::test]
    async fn test_list_empty_registry() {
        let listing = list_installed_servers(&ServerRegistry::new()).await;
        assert_eq!(listing.count, 0);
        assert!(listing.installed_servers.is_empty());
    }

    #[tokio::test]
    async fn test_execute_on_missing_server_lists_available() {
        let servers = ServerRegistry::new();
        servers
            .insert("exa", ServerRecord::running(ServerConfigMap::new()))
            .await;

        let output = execute_mcp_tool(&servers, "github", "search", Value::Null)
            .await
            .unwrap();
        assert_eq!(
            output,
            json!({"error": "Server 'github' not installed. Available servers: [\"exa\"]"})
        );
    }

    #[tokio::test]
    async fn test_execute_on_installed_server_returns_stub() {
        let servers = ServerRegistry::new();
        servers
            .insert("exa", ServerRecord::running(ServerConfigMap::new()))
            .await;

        let tool = execute_tool(servers);
        let output = tool
            .call(json!({
                "server_name": "exa",
                "tool_name": "web_search_exa",
                "arguments": {"query": "Agent Development Kit"}
            }))
            .await
            .unwrap();

        assert_eq!(output["status"], "executed");
        assert_eq!(output["tool"], "web_search_exa");
        assert_eq!(output["arguments"]["query"], "Agent Development Kit");
        assert_eq!(output["note"], EXECUTION_NOTE);
    }

    #[tokio::test]
    async fn test_list_tool_sees_later_inserts() {
        let servers = ServerRegistry::new();
        let tool = list_servers_tool(servers.clone());

        servers
            .insert("exa", ServerRecord::running(ServerConfigMap::new()))
            .await;

        let output = tool.call(Value::Null).await.unwrap();
        assert_eq!(output["count"], 1);
        assert_eq!(output["installed_servers"]["exa"]["status"], "running");
    }
}
