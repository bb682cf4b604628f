//! Tool descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the planner sees of a registered tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Stable identifier used for lookup and dispatch.
    pub name: String,
    /// Human-readable description used by the planner to select the tool.
    pub description: String,
    /// JSON schema hint for the tool's arguments.
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Create a new descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}
