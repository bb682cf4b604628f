//! The Smithery MCP agent shell.
//!
//! Owns the tool registry and the installed-server registry, and drives an
//! injected [`Planner`] over them. Planning is external; the agent only
//! executes the steps it is handed, in order.

use smithery_core::{
    CommandRunner, ExecutionReport, Plan, Planner, ServerRegistry, SmitheryConfig, StepOutcome,
    ToolDescriptor, validate_config,
};
use smithery_runtime::ProcessCommandRunner;
use smithery_tools::{ToolRegistry, create_smithery_tools};
use std::sync::Arc;
use tracing::{debug, info};

use crate::builtin::{execute_tool, list_servers_tool};
use crate::error::AgentError;
use crate::model::ModelSettings;

/// Agent that can discover, install and use MCP servers via the Smithery CLI.
pub struct SmitheryAgent {
    settings: ModelSettings,
    config: SmitheryConfig,
    tools: ToolRegistry,
    servers: ServerRegistry,
    planner: Arc<dyn Planner>,
}

impl SmitheryAgent {
    /// Build an agent with every tool registered.
    ///
    /// `runner` backs the install and inspect tools. The server manager and
    /// the inline function tools share one fresh [`ServerRegistry`].
    pub fn new(
        settings: ModelSettings,
        config: SmitheryConfig,
        runner: Arc<dyn CommandRunner>,
        planner: Arc<dyn Planner>,
    ) -> Result<Self, AgentError> {
        validate_config(&config)?;

        let servers = ServerRegistry::new();
        let mut tools = ToolRegistry::new();
        tools.register_all(create_smithery_tools(&config, runner, servers.clone()))?;
        tools.register(Arc::new(list_servers_tool(servers.clone())))?;
        tools.register(Arc::new(execute_tool(servers.clone())))?;

        info!(
            model = %settings.model_name(),
            tool_count = tools.len(),
            "Smithery agent initialized"
        );

        Ok(Self {
            settings,
            config,
            tools,
            servers,
            planner,
        })
    }

    pub const fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub const fn config(&self) -> &SmitheryConfig {
        &self.config
    }

    /// Registered tools.
    pub const fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Handle onto the installed-server registry.
    pub const fn servers(&self) -> &ServerRegistry {
        &self.servers
    }

    /// Descriptors offered to the planner.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.descriptors()
    }

    /// Execute `plan` step by step.
    ///
    /// Dispatch failures are recorded as `{"error": ...}` outputs and do not
    /// stop later steps.
    pub async fn execute_plan(&self, query: &str, plan: Plan) -> ExecutionReport {
        let mut report = ExecutionReport::new(query);

        for step in plan.steps {
            debug!(tool = %step.tool, "Executing plan step");
            let output = self.tools.invoke(&step.tool, step.arguments.clone()).await;
            report.steps.push(StepOutcome {
                tool: step.tool,
                arguments: step.arguments,
                output,
            });
        }

        report
    }

    /// Plan `query` and execute the plan, returning the structured report.
    pub async fn run(&self, query: &str) -> Result<ExecutionReport, AgentError> {
        let plan = self.planner.plan(query, &self.descriptors()).await?;
        info!(query = %query, steps = plan.len(), "Plan generated");
        Ok(self.execute_plan(query, plan).await)
    }

    /// Plan `query` and execute the plan, returning the report as pretty JSON.
    pub async fn plan_and_execute(&self, query: &str) -> Result<String, AgentError> {
        Ok(self.run(query).await?.to_pretty_json())
    }
}

impl std::fmt::Debug for SmitheryAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmitheryAgent")
            .field("settings", &self.settings)
            .field("tools", &self.tools)
            .finish_non_exhaustive()
    }
}

/// Create an agent backed by the real Smithery CLI.
///
/// The API key falls back to `GOOGLE_API_KEY`; `model_name` defaults to
/// `gemini-1.5-pro`; `smithery_config` defaults to [`SmitheryConfig::default`].
pub fn create_agent(
    api_key: Option<String>,
    model_name: Option<&str>,
    smithery_config: Option<SmitheryConfig>,
    planner: Arc<dyn Planner>,
) -> Result<SmitheryAgent, AgentError> {
    let settings = ModelSettings::resolve(api_key, model_name)?;
    let config = smithery_config.unwrap_or_default();
    let runner: Arc<dyn CommandRunner> = Arc::new(ProcessCommandRunner::from_config(&config));
    SmitheryAgent::new(settings, config, runner, planner)
}
