//! Concrete Smithery tools.
//!
//! Each tool exposes a typed `execute` method plus the uniform `Tool::call`
//! entry point used by the agent.

mod inspect;
mod install;
mod search;
mod server_manager;

pub use inspect::{
    DiscoveredTool, INSPECT_TOOL_NAME, InspectResult, InspectStatus, InspectTool,
    parse_tools_from_output,
};
pub use install::{INSTALL_TOOL_NAME, InstallResult, InstallStatus, InstallTool};
pub use search::{SEARCH_TOOL_NAME, SearchHit, SearchResult, SearchTool};
pub use server_manager::{
    ActionStatus, LookupStatus, MANAGER_TOOL_NAME, ManagerResponse, ServerAction,
    ServerManagerTool,
};
