//! Closure-backed tools.
//!
//! Used for small inline capabilities that don't warrant their own type,
//! such as listing installed servers from the agent shell.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde_json::{Value, json};
use smithery_core::{Tool, ToolError};
use std::future::Future;
use std::sync::Arc;

type Handler = Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value, ToolError>> + Send + Sync>;

/// A tool whose behavior is an async closure over its arguments object.
pub struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
    handler: Handler,
}

impl FunctionTool {
    /// Create a function tool.
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: json!({ "type": "object", "properties": {} }),
            handler: Arc::new(move |arguments| Box::pin(handler(arguments))),
        }
    }

    /// Set the JSON schema hint for the arguments object.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> Value {
        self.parameters.clone()
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        (self.handler)(arguments).await
    }
}
