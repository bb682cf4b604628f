//! Command-line front end for the Smithery MCP agent.
//!
//! [`bootstrap`] is the composition root; [`handlers`] hold one module per
//! command; [`KeywordPlanner`] is the offline planner used by the
//! agent-driven modes.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod planner;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use planner::KeywordPlanner;
