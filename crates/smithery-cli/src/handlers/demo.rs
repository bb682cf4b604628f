//! Demo command handler.
//!
//! Walks the agent through four queries: search, install, use, list.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Queries run by the demo, with their headings.
pub const DEMO_QUERIES: [(&str, &str); 4] = [
    (
        "Searching for web search MCP servers...",
        "Search for MCP servers that provide web search capabilities",
    ),
    (
        "Installing a web search MCP server...",
        "Install the exa web search MCP server",
    ),
    (
        "Using the installed MCP server...",
        "Use the exa server to search for information about Agent Development Kit",
    ),
    (
        "Listing installed servers...",
        "Show me all the MCP servers I have installed",
    ),
];

/// Execute the demo command.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let agent = ctx.agent()?;

    println!("Smithery MCP Agent Example");
    println!("{}", "=".repeat(50));

    for (index, (heading, query)) in DEMO_QUERIES.iter().enumerate() {
        println!("\n{}. {heading}", index + 1);
        let result = agent.plan_and_execute(query).await?;
        println!("Result: {result}");
    }

    Ok(())
}
