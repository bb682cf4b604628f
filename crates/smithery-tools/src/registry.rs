//! Registry of tools available to the agent.
//!
//! Names are unique within a registry. Dispatch through [`ToolRegistry::invoke`]
//! never fails: unknown tools and malformed arguments come back as
//! `{"error": ...}` records the planner can reason about.

use serde_json::{Value, json};
use smithery_core::{Tool, ToolDescriptor, ToolError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered set of uniquely named tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// Returns `ToolError::Duplicate` if a tool with the same name exists.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        if self.contains(tool.name()) {
            return Err(ToolError::Duplicate(tool.name().to_string()));
        }

        debug!(tool = %tool.name(), "Registered tool");
        self.tools.push(tool);
        Ok(())
    }

    /// Register several tools, stopping at the first duplicate.
    pub fn register_all<I>(&mut self, tools: I) -> Result<(), ToolError>
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        for tool in tools {
            self.register(tool)?;
        }
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// True when a tool with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Descriptors for the planner, in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    /// Iterate over registered tools.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Find a tool by name and execute it.
    pub async fn try_invoke(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call(arguments).await
    }

    /// Find a tool by name and execute it, reporting dispatch errors as data.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Value {
        match self.try_invoke(name, arguments).await {
            Ok(output) => output,
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool dispatch failed");
                json!({ "error": e.to_string() })
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionTool;

    fn echo(name: &str) -> Arc<dyn Tool> {
        Arc::new(FunctionTool::new(name, "Echo arguments back", |arguments| async move {
            Ok(arguments)
        }))
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.descriptors().is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("echo")).unwrap();

        let err = registry.register(echo("echo")).unwrap_err();
        assert!(matches!(err, ToolError::Duplicate(ref name) if name == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_keep_registration_order() {
        let mut registry = ToolRegistry::new();
        registry
            .register_all([echo("b"), echo("a"), echo("c")])
            .unwrap();
        assert_eq!(registry.names(), vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_invoke_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("echo")).unwrap();

        let output = registry.invoke("echo", json!({"x": 1})).await;
        assert_eq!(output, json!({"x": 1}));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_record() {
        let registry = ToolRegistry::new();
        let output = registry.invoke("missing", Value::Null).await;
        assert_eq!(output, json!({"error": "Unknown tool: missing"}));

        let err = registry.try_invoke("missing", Value::Null).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(_)));
    }
}
