//! Offline keyword planner.
//!
//! Stands in for a model-backed planner so the CLI can drive the agent
//! without network access. Each query maps to at most one intent, checked in
//! a fixed order; steps naming tools absent from the offered descriptors are
//! dropped.

use async_trait::async_trait;
use serde_json::json;
use smithery_core::{Plan, PlanStep, Planner, PlannerError, ToolDescriptor};
use tracing::debug;

const FILLER_WORDS: [&str; 4] = ["the", "a", "an", "server"];

/// Maps phrases like "install exa" or "list servers" to tool calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordPlanner;

impl KeywordPlanner {
    pub const fn new() -> Self {
        Self
    }

    /// Build the plan for `query` without filtering by available tools.
    pub fn steps_for(&self, query: &str) -> Vec<PlanStep> {
        let words = tokenize(query);
        let has = |keyword: &str| words.iter().any(|w| w.eq_ignore_ascii_case(keyword));

        if let Some(server) = target_after(&words, "install") {
            return vec![
                PlanStep::new("smithery_install", json!({ "server_name": server })),
                PlanStep::new(
                    "mcp_server_manager",
                    json!({ "action": "start", "server_name": server }),
                ),
            ];
        }

        if let Some(server) = target_after(&words, "inspect") {
            return vec![PlanStep::new("smithery_inspect", json!({ "server_name": server }))];
        }

        for action in ["start", "stop", "status"] {
            if let Some(server) = target_after(&words, action) {
                return vec![PlanStep::new(
                    "mcp_server_manager",
                    json!({ "action": action, "server_name": server }),
                )];
            }
        }

        if let Some(server) = target_after(&words, "use") {
            return vec![PlanStep::new(
                "execute_mcp_tool",
                json!({
                    "server_name": server,
                    "tool_name": "search",
                    "arguments": { "query": query }
                }),
            )];
        }

        if has("installed") || has("list") {
            return vec![PlanStep::new("list_installed_servers", json!({}))];
        }

        if has("search") || has("find") {
            return vec![PlanStep::new("smithery_search", json!({ "query": query }))];
        }

        Vec::new()
    }
}

#[async_trait]
impl Planner for KeywordPlanner {
    async fn plan(&self, query: &str, tools: &[ToolDescriptor]) -> Result<Plan, PlannerError> {
        let steps: Vec<PlanStep> = self
            .steps_for(query)
            .into_iter()
            .filter(|step| tools.iter().any(|t| t.name == step.tool))
            .collect();

        debug!(query = %query, steps = steps.len(), "Keyword plan built");
        Ok(Plan::new(steps))
    }
}

/// Split on whitespace and strip surrounding punctuation, keeping characters
/// that occur in package names (`@`, `/`, `-`, `_`).
fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| {
                !(c.is_alphanumeric() || matches!(c, '@' | '/' | '-' | '_'))
            })
            .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// The first non-filler word following `keyword`.
fn target_after(words: &[String], keyword: &str) -> Option<String> {
    let position = words.iter().position(|w| w.eq_ignore_ascii_case(keyword))?;
    words[position + 1..]
        .iter()
        .find(|w| !FILLER_WORDS.iter().any(|f| w.eq_ignore_ascii_case(f)))
        .cloned()
}
