//! Server manager tool.
//!
//! Table-driven dispatch over the shared [`ServerRegistry`]. There are no
//! transition guards: any action is valid from any prior state. Starting a
//! server only records it; no process is launched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use smithery_core::{
    ServerConfigMap, ServerRecord, ServerRegistry, ServerStatus, Tool, ToolError, parse_arguments,
    to_value,
};
use std::str::FromStr;
use tracing::{info, warn};

pub const MANAGER_TOOL_NAME: &str = "mcp_server_manager";

/// Actions understood by the server manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
    Configure,
    Status,
}

impl ServerAction {
    /// All actions, in the order reported to callers.
    pub const ALL: [Self; 4] = [Self::Start, Self::Stop, Self::Configure, Self::Status];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Configure => "configure",
            Self::Status => "status",
        }
    }
}

impl FromStr for ServerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("Unknown action: {s}"))
    }
}

impl std::fmt::Display for ServerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a start/stop/configure action took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Marker reported by `status` for unknown servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    NotInstalled,
}

/// Response of the server manager, one shape per outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ManagerResponse {
    /// Result of `start`, `stop` or `configure`.
    Action {
        server: String,
        action: ServerAction,
        status: ActionStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        config: Option<ServerConfigMap>,
    },
    /// `status` of a known server.
    Info { server: String, info: ServerRecord },
    /// `status` of an unknown server.
    NotInstalled { server: String, status: LookupStatus },
    /// The action string was not recognized.
    UnknownAction {
        error: String,
        valid_actions: Vec<&'static str>,
    },
}

impl Serialize for ServerAction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl ManagerResponse {
    fn success(server: &str, action: ServerAction, message: Option<String>) -> Self {
        Self::Action {
            server: server.to_string(),
            action,
            status: ActionStatus::Success,
            message,
            config: None,
        }
    }

    fn not_found(server: &str, action: ServerAction) -> Self {
        Self::Action {
            server: server.to_string(),
            action,
            status: ActionStatus::Error,
            message: Some(format!("Server {server} not found")),
            config: None,
        }
    }

    /// Whether this response reports a failure.
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Action {
                status: ActionStatus::Error,
                ..
            } | Self::UnknownAction { .. }
        )
    }
}

#[derive(Debug, Deserialize)]
struct ManagerArgs {
    action: String,
    server_name: String,
    #[serde(default)]
    config: Option<ServerConfigMap>,
}

/// Manage installed MCP servers: start, stop, configure, status.
#[derive(Debug, Clone)]
pub struct ServerManagerTool {
    servers: ServerRegistry,
}

impl ServerManagerTool {
    /// Create the tool over a shared registry handle.
    pub const fn new(servers: ServerRegistry) -> Self {
        Self { servers }
    }

    /// The registry this tool mutates.
    pub const fn servers(&self) -> &ServerRegistry {
        &self.servers
    }

    /// Dispatch `action` for `server_name`.
    pub async fn execute(
        &self,
        action: &str,
        server_name: &str,
        config: Option<ServerConfigMap>,
    ) -> ManagerResponse {
        let Ok(action) = action.parse::<ServerAction>() else {
            warn!(action = %action, "Unknown server manager action");
            return ManagerResponse::UnknownAction {
                error: format!("Unknown action: {action}"),
                valid_actions: ServerAction::ALL.iter().map(ServerAction::as_str).collect(),
            };
        };

        match action {
            ServerAction::Start => self.start(server_name, config).await,
            ServerAction::Stop => self.stop(server_name).await,
            ServerAction::Configure => self.configure(server_name, config.unwrap_or_default()).await,
            ServerAction::Status => self.status(server_name).await,
        }
    }

    /// Record `server_name` as running, overwriting any previous record.
    pub async fn start(&self, server_name: &str, config: Option<ServerConfigMap>) -> ManagerResponse {
        self.servers
            .insert(server_name, ServerRecord::running(config.unwrap_or_default()))
            .await;

        info!(server_name = %server_name, "MCP server started");
        ManagerResponse::success(
            server_name,
            ServerAction::Start,
            Some(format!("Server {server_name} started successfully")),
        )
    }

    /// Mark `server_name` as stopped.
    pub async fn stop(&self, server_name: &str) -> ManagerResponse {
        if !self.servers.set_status(server_name, ServerStatus::Stopped).await {
            return ManagerResponse::not_found(server_name, ServerAction::Stop);
        }

        info!(server_name = %server_name, "MCP server stopped");
        ManagerResponse::success(
            server_name,
            ServerAction::Stop,
            Some(format!("Server {server_name} stopped successfully")),
        )
    }

    /// Replace the stored config of `server_name` wholesale.
    pub async fn configure(&self, server_name: &str, config: ServerConfigMap) -> ManagerResponse {
        if !self.servers.replace_config(server_name, config.clone()).await {
            return ManagerResponse::not_found(server_name, ServerAction::Configure);
        }

        info!(server_name = %server_name, "MCP server configured");
        ManagerResponse::Action {
            server: server_name.to_string(),
            action: ServerAction::Configure,
            status: ActionStatus::Success,
            message: None,
            config: Some(config),
        }
    }

    /// Report the stored record of `server_name`.
    pub async fn status(&self, server_name: &str) -> ManagerResponse {
        match self.servers.get(server_name).await {
            Some(info) => ManagerResponse::Info {
                server: server_name.to_string(),
                info,
            },
            None => ManagerResponse::NotInstalled {
                server: server_name.to_string(),
                status: LookupStatus::NotInstalled,
            },
        }
    }
}

#[async_trait]
impl Tool for ServerManagerTool {
    fn name(&self) -> &str {
        MANAGER_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Manage installed MCP servers - start, stop, configure"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "action": { "type": "string", "enum": ["start", "stop", "configure", "status"] },
                "server_name": { "type": "string", "description": "Name of the server" },
                "config": { "type": "object", "description": "Optional configuration for the server" }
            },
            "required": ["action", "server_name"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: ManagerArgs = parse_arguments(MANAGER_TOOL_NAME, arguments)?;
        let response = self
            .execute(&args.action, &args.server_name, args.config)
            .await;
        to_value(MANAGER_TOOL_NAME, &response)
    }
}
