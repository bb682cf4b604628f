//! Core domain types and port definitions for the Smithery MCP agent.
//!
//! This crate has no process, filesystem or network code. Infrastructure
//! crates implement the ports defined in [`ports`]; the agent shell composes
//! them.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CommandResult, ExecutionReport, Plan, PlanStep, SIMULATED_PID, ServerConfigMap, ServerRecord,
    ServerRegistry, ServerStatus, StepOutcome, ToolDescriptor,
};
pub use ports::{
    CommandError, CommandRunner, Planner, PlannerError, Tool, ToolError, parse_arguments,
    to_value,
};
pub use settings::{
    API_KEY_ENV, DEFAULT_CLI_PACKAGE, DEFAULT_CLIENT, DEFAULT_INSPECT_PACKAGE, DEFAULT_MODEL_NAME,
    SettingsError, SmitheryConfig, validate_config,
};
