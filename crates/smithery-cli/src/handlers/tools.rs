//! Direct tool command handlers.
//!
//! Run a single Smithery tool and print its JSON result. Failed installs and
//! inspections are still printed; they are results, not errors.

use smithery_tools::{InspectTool, InstallTool, SearchTool};

use super::print_json;
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the search command.
pub fn search(query: &[String], limit: i64) -> Result<(), CliError> {
    let query = query.join(" ");
    if query.trim().is_empty() {
        return Err(CliError::Arguments("search query cannot be empty".into()));
    }
    print_json(&SearchTool::new().execute(&query, limit))
}

/// Execute the install command.
pub async fn install(
    ctx: &CliContext,
    server_name: &str,
    client: Option<&str>,
    config_file: Option<&str>,
) -> Result<(), CliError> {
    let tool = InstallTool::new(ctx.smithery(), ctx.runner());
    let result = tool.execute(server_name, client, config_file).await;
    print_json(&result)
}

/// Execute the inspect command.
pub async fn inspect(ctx: &CliContext, server_name: &str) -> Result<(), CliError> {
    let tool = InspectTool::new(ctx.smithery(), ctx.runner());
    print_json(&tool.execute(server_name).await)
}
