//! Agent shell for the Smithery MCP agent.
//!
//! [`SmitheryAgent`] registers the Smithery tools together with two inline
//! function tools (`list_installed_servers`, `execute_mcp_tool`) and
//! executes plans produced by an injected [`smithery_core::Planner`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod agent;
mod builtin;
mod error;
mod model;

pub use agent::{SmitheryAgent, create_agent};
pub use builtin::{
    EXECUTE_TOOL_NAME, InstalledServers, LIST_SERVERS_TOOL_NAME, McpToolInvocation,
    execute_mcp_tool, list_installed_servers,
};
pub use error::AgentError;
pub use model::ModelSettings;
