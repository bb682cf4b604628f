//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (processes, model providers, etc.).
//!
//! # Structure
//!
//! - `command` - Captured output of an external command
//! - `server` - Installed MCP server records and the shared registry
//! - `tool` - Tool descriptors handed to the planner
//! - `plan` - Plans produced by the planner and their execution reports

mod command;
mod plan;
mod server;
mod tool;

pub use command::CommandResult;
pub use plan::{ExecutionReport, Plan, PlanStep, StepOutcome};
pub use server::{SIMULATED_PID, ServerConfigMap, ServerRecord, ServerRegistry, ServerStatus};
pub use tool::ToolDescriptor;
