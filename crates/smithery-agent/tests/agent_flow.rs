//! End-to-end agent flows over scripted planner and runner ports.

use async_trait::async_trait;
use serde_json::{Value, json};
use smithery_agent::{ModelSettings, SmitheryAgent};
use smithery_core::{
    CommandError, CommandResult, CommandRunner, Plan, PlanStep, Planner, PlannerError,
    SmitheryConfig, ToolDescriptor,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Planner returning a fixed plan per query.
struct ScriptedPlanner {
    plans: HashMap<String, Plan>,
}

impl ScriptedPlanner {
    fn new(entries: Vec<(&str, Vec<PlanStep>)>) -> Self {
        Self {
            plans: entries
                .into_iter()
                .map(|(query, steps)| (query.to_string(), Plan::new(steps)))
                .collect(),
        }
    }
}

#[async_trait]
impl Planner for ScriptedPlanner {
    async fn plan(&self, query: &str, _tools: &[ToolDescriptor]) -> Result<Plan, PlannerError> {
        self.plans
            .get(query)
            .cloned()
            .ok_or_else(|| PlannerError::Failed(format!("no plan for '{query}'")))
    }
}

/// Runner that records argv and succeeds unless the server is "broken".
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, argv: &[String]) -> Result<CommandResult, CommandError> {
        self.calls.lock().unwrap().push(argv.to_vec());
        if argv.iter().any(|arg| arg == "broken") {
            return Err(CommandError::Failed {
                exit_code: Some(1),
                stderr: "package not found".to_string(),
            });
        }
        Ok(CommandResult::new("ok", "", 0))
    }
}

fn agent(planner: ScriptedPlanner, runner: Arc<RecordingRunner>) -> SmitheryAgent {
    let settings = ModelSettings::resolve_with(Some("test-key".into()), None, |_| None).unwrap();
    SmitheryAgent::new(settings, SmitheryConfig::default(), runner, Arc::new(planner)).unwrap()
}

fn parse(report: &str) -> Value {
    serde_json::from_str(report).unwrap()
}

#[tokio::test]
async fn search_install_use_list_walkthrough() {
    let planner = ScriptedPlanner::new(vec![
        (
            "search",
            vec![PlanStep::new("smithery_search", json!({"query": "web search"}))],
        ),
        (
            "install exa",
            vec![
                PlanStep::new("smithery_install", json!({"server_name": "exa"})),
                PlanStep::new(
                    "mcp_server_manager",
                    json!({"action": "start", "server_name": "exa"}),
                ),
            ],
        ),
        (
            "use exa",
            vec![PlanStep::new(
                "execute_mcp_tool",
                json!({"server_name": "exa", "tool_name": "web_search_exa", "arguments": {"query": "ADK"}}),
            )],
        ),
        (
            "list",
            vec![PlanStep::new("list_installed_servers", json!({}))],
        ),
    ]);
    let runner = Arc::new(RecordingRunner::default());
    let agent = agent(planner, Arc::clone(&runner));

    let search = parse(&agent.plan_and_execute("search").await.unwrap());
    assert_eq!(search["query"], "search");
    assert_eq!(search["steps"][0]["output"]["results"][0]["name"], "exa");

    let install = parse(&agent.plan_and_execute("install exa").await.unwrap());
    assert_eq!(install["steps"][0]["output"]["status"], "installed");
    assert_eq!(install["steps"][1]["output"]["status"], "success");

    let used = parse(&agent.plan_and_execute("use exa").await.unwrap());
    assert_eq!(used["steps"][0]["output"]["status"], "executed");

    let listed = parse(&agent.plan_and_execute("list").await.unwrap());
    assert_eq!(listed["steps"][0]["output"]["count"], 1);

    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].join(" "),
        "npx -y @smithery/cli install exa --client claude"
    );
}

#[tokio::test]
async fn failed_install_and_missing_server_are_reported_as_data() {
    let planner = ScriptedPlanner::new(vec![(
        "try broken",
        vec![
            PlanStep::new("smithery_install", json!({"server_name": "broken"})),
            PlanStep::new(
                "execute_mcp_tool",
                json!({"server_name": "broken", "tool_name": "anything"}),
            ),
            PlanStep::new("smithery_install", json!({"client": "claude"})),
        ],
    )]);
    let agent = agent(planner, Arc::new(RecordingRunner::default()));

    let report = agent.run("try broken").await.unwrap();
    assert_eq!(report.steps.len(), 3);
    assert_eq!(report.steps[0].output["status"], "failed");
    assert_eq!(
        report.steps[0].output["error"],
        "Command failed: package not found"
    );
    assert_eq!(
        report.steps[1].output["error"],
        "Server 'broken' not installed. Available servers: []"
    );
    assert!(
        report.steps[2].output["error"]
            .as_str()
            .unwrap()
            .contains("Invalid arguments for tool 'smithery_install'")
    );
}

#[tokio::test]
async fn configure_replaces_config_through_agent() {
    let planner = ScriptedPlanner::new(vec![(
        "reconfigure exa",
        vec![
            PlanStep::new(
                "mcp_server_manager",
                json!({"action": "start", "server_name": "exa", "config": {"key": "v1"}}),
            ),
            PlanStep::new(
                "mcp_server_manager",
                json!({"action": "configure", "server_name": "exa", "config": {"key": "v2"}}),
            ),
            PlanStep::new(
                "mcp_server_manager",
                json!({"action": "status", "server_name": "exa"}),
            ),
        ],
    )]);
    let agent = agent(planner, Arc::new(RecordingRunner::default()));

    let report = agent.run("reconfigure exa").await.unwrap();
    let info = &report.steps[2].output["info"];
    assert_eq!(info["status"], "running");
    assert_eq!(info["config"], json!({"key": "v2"}));
}

#[tokio::test]
async fn unplanned_query_is_planning_error() {
    let agent = agent(ScriptedPlanner::new(vec![]), Arc::new(RecordingRunner::default()));
    let err = agent.plan_and_execute("unknown").await.unwrap_err();
    assert_eq!(err.to_string(), "Planning failed: no plan for 'unknown'");
}
