//! Registry search tool.
//!
//! The Smithery CLI has no search subcommand, so this tool is a simulation:
//! it returns the same two records whatever the query or limit. Real registry
//! integration would replace `execute`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value, json};
use smithery_core::{Tool, ToolError, parse_arguments, to_value};
use tracing::debug;

pub const SEARCH_TOOL_NAME: &str = "smithery_search";

const DEFAULT_LIMIT: i64 = 10;

const SIMULATION_NOTE: &str = "This is a simulated search. In production, use Smithery's API";

/// One server found in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub description: String,
    pub package: String,
    /// Hosted by Smithery rather than run locally.
    pub remote: bool,
    pub tools_count: u32,
}

impl SearchHit {
    fn new(name: &str, description: &str, remote: bool, tools_count: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            package: name.to_string(),
            remote,
            tools_count,
        }
    }
}

/// Result of a registry search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub note: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    /// Any JSON number; the value is never applied.
    #[serde(default = "default_limit")]
    limit: Number,
}

fn default_limit() -> Number {
    Number::from(DEFAULT_LIMIT)
}

/// Search for MCP servers in the Smithery registry.
#[derive(Debug, Clone, Default)]
pub struct SearchTool;

impl SearchTool {
    pub const fn new() -> Self {
        Self
    }

    /// Search the registry.
    ///
    /// `limit` is accepted but not applied; see the module docs.
    pub fn execute(&self, query: &str, limit: i64) -> SearchResult {
        debug!(query = %query, limit, "Simulated Smithery registry search");

        SearchResult {
            query: query.to_string(),
            results: vec![
                SearchHit::new("exa", "Fast, intelligent web search and crawling", true, 6),
                SearchHit::new("@mnhlt/WebSearch-MCP", "Self-hosted web search API", false, 1),
            ],
            note: SIMULATION_NOTE.to_string(),
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Search for MCP servers in the Smithery registry by keyword or functionality"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Search query, e.g. \"web search\"" },
                "limit": { "type": "integer", "description": "Maximum number of results", "default": DEFAULT_LIMIT }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        let args: SearchArgs = parse_arguments(SEARCH_TOOL_NAME, arguments)?;
        let limit = args.limit.as_i64().unwrap_or(DEFAULT_LIMIT);
        to_value(SEARCH_TOOL_NAME, &self.execute(&args.query, limit))
    }
}
