//! Plans produced by a planner and the report of executing them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tool invocation chosen by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Name of the tool to invoke.
    pub tool: String,
    /// Arguments object passed to the tool.
    #[serde(default)]
    pub arguments: Value,
}

impl PlanStep {
    /// Create a new plan step.
    pub fn new(tool: impl Into<String>, arguments: Value) -> Self {
        Self {
            tool: tool.into(),
            arguments,
        }
    }
}

/// Ordered list of tool invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Create a plan from its steps.
    #[must_use]
    pub const fn new(steps: Vec<PlanStep>) -> Self {
        Self { steps }
    }

    /// A plan with no steps.
    #[must_use]
    pub const fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Result of one executed plan step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub tool: String,
    pub arguments: Value,
    /// Tool output, or an `{"error": ...}` record if dispatch failed.
    pub output: Value,
}

/// Result of executing a whole plan for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub query: String,
    pub steps: Vec<StepOutcome>,
}

impl ExecutionReport {
    /// Create an empty report for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            steps: Vec::new(),
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to render report: {e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_arguments_default_to_null() {
        let step: PlanStep = serde_json::from_value(json!({"tool": "list_installed_servers"})).unwrap();
        assert_eq!(step.tool, "list_installed_servers");
        assert!(step.arguments.is_null());
    }

    #[test]
    fn test_report_renders_steps() {
        let mut report = ExecutionReport::new("list servers");
        report.steps.push(StepOutcome {
            tool: "list_installed_servers".to_string(),
            arguments: json!({}),
            output: json!({"count": 0}),
        });

        let rendered = report.to_pretty_json();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["query"], "list servers");
        assert_eq!(parsed["steps"][0]["output"]["count"], 0);
    }
}
