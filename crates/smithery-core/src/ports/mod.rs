//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure and from the agent runtime. They contain no implementation
//! details and use only domain types.
//!
//! # Design Rules
//!
//! - No process spawning or model provider details in any signature
//! - Tool failures are data, not errors: `ToolError` only covers malformed
//!   arguments and result serialization
//! - The planner is an external collaborator reached only through `Planner`

pub mod command_runner;
pub mod planner;
pub mod tool;

pub use command_runner::{CommandError, CommandRunner};
pub use planner::{Planner, PlannerError};
pub use tool::{Tool, ToolError, parse_arguments, to_value};
