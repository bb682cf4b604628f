//! Tool set construction.

use crate::tools::{InspectTool, InstallTool, SearchTool, ServerManagerTool};
use smithery_core::{CommandRunner, ServerRegistry, SmitheryConfig, Tool};
use smithery_runtime::ProcessCommandRunner;
use std::sync::Arc;

/// Build the four Smithery tools: search, install, inspect, server manager.
///
/// `runner` is shared by install and inspect. `servers` is the registry the
/// server manager mutates; pass a clone of the agent's handle so both see
/// the same state.
pub fn create_smithery_tools(
    config: &SmitheryConfig,
    runner: Arc<dyn CommandRunner>,
    servers: ServerRegistry,
) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(SearchTool::new()),
        Arc::new(InstallTool::new(config, Arc::clone(&runner))),
        Arc::new(InspectTool::new(config, runner)),
        Arc::new(ServerManagerTool::new(servers)),
    ]
}

/// Build the tool set with a real subprocess runner and a fresh registry.
pub fn create_default_tools(config: &SmitheryConfig) -> (Vec<Arc<dyn Tool>>, ServerRegistry) {
    let servers = ServerRegistry::new();
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessCommandRunner::from_config(config));
    (
        create_smithery_tools(config, runner, servers.clone()),
        servers,
    )
}
