//! Process runtime for the Smithery MCP agent.
//!
//! Provides the tokio-backed [`ProcessCommandRunner`] implementation of the
//! `CommandRunner` port and the [`SmitheryCli`] argv builder for the external
//! package manager.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

mod cli;
mod command;

pub use cli::{SmitheryCli, render_command};
pub use command::ProcessCommandRunner;
