//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Build the agent or tool they need from the context
//!   2. Run it
//!   3. Print the JSON result to stdout
//!
//! Diagnostics go through `tracing` (stderr) so stdout stays parseable.

pub mod check;
pub mod demo;
pub mod interactive;
pub mod mock;
pub mod tools;

use serde::Serialize;

use crate::error::CliError;

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Agent(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
