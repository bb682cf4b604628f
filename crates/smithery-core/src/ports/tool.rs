//! Tool capability port.
//!
//! Every tool the agent can invoke implements [`Tool`]. The agent treats all
//! tools uniformly through this trait regardless of the concrete type.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::ToolDescriptor;

/// Errors at the tool dispatch boundary.
///
/// Domain failures (a failed install, an unknown server) are never reported
/// through this type; tools return them as result values.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments object did not match the tool's parameters.
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    /// The tool's result could not be converted to JSON.
    #[error("Failed to serialize result of tool '{tool}': {message}")]
    Serialization { tool: String, message: String },

    /// No tool with this name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with this name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),
}

/// A named, described unit of capability.
///
/// `call` may suspend on I/O but must not block the executor.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable identifier used for lookup and registration.
    fn name(&self) -> &str;

    /// Human-readable description for the planner.
    fn description(&self) -> &str;

    /// JSON schema hint for the arguments object.
    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    /// Descriptor handed to the planner.
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(self.name(), self.description(), self.parameters())
    }

    /// Execute the tool with a JSON arguments object.
    async fn call(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Deserialize a tool's arguments object.
///
/// `null` is treated as an empty object so tools without required
/// parameters can be called without arguments.
pub fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };

    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// Serialize a tool's typed result.
pub fn to_value<T: Serialize>(tool: &str, result: &T) -> Result<Value, ToolError> {
    serde_json::to_value(result).map_err(|e| ToolError::Serialization {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Args {
        #[serde(default)]
        limit: Option<u32>,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Required {
        server_name: String,
    }

    #[test]
    fn test_null_arguments_parse_as_empty_object() {
        let args: Args = parse_arguments("demo", Value::Null).unwrap();
        assert_eq!(args.limit, None);
    }

    #[test]
    fn test_missing_required_field_is_invalid_arguments() {
        let err = parse_arguments::<Required>("smithery_inspect", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { ref tool, .. } if tool == "smithery_inspect"));
        assert!(err.to_string().contains("server_name"));
    }
}
