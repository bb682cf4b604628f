//! Default command handler.
//!
//! Runs when no subcommand is given: builds the agent and runs a small
//! search. Without an API key it falls back to the mock checks.

use smithery_tools::SearchTool;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

const CHECK_QUERY: &str = "web search";
const CHECK_LIMIT: i64 = 5;
const SHOWN_RESULTS: usize = 3;

/// Which checks the default command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    Agent,
    Mock,
}

/// Pick the agent checks when an API key is available.
pub fn select_mode(ctx: &CliContext) -> CheckMode {
    if ctx.has_api_key() {
        CheckMode::Agent
    } else {
        CheckMode::Mock
    }
}

/// Execute the default command.
pub async fn execute(ctx: &CliContext) -> Result<CheckMode, CliError> {
    let mode = select_mode(ctx);
    if mode == CheckMode::Mock {
        warn!("GOOGLE_API_KEY not set, using mock mode");
        super::mock::execute(ctx)?;
        return Ok(mode);
    }

    println!("Testing Smithery MCP Agent");
    println!("{}", "=".repeat(50));

    println!("\n1. Creating agent...");
    let agent = ctx.agent()?;
    println!("✓ Agent created with {} tools", agent.tools().len());

    println!("\n2. Testing search for MCP servers...");
    let result = SearchTool::new().execute(CHECK_QUERY, CHECK_LIMIT);
    println!("✓ Found {} servers", result.results.len());
    for hit in result.results.iter().take(SHOWN_RESULTS) {
        println!("  - {}: {}", hit.name, hit.description);
    }

    println!("\n✅ All checks passed!");
    Ok(mode)
}
