//! Planner port.
//!
//! The planner is the seam to the external agent runtime: given a user query
//! and the registered tool descriptors it decides which tools to call.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Plan, ToolDescriptor};

/// Errors reported by a planner.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The planner could not produce a plan for the query.
    #[error("Planning failed: {0}")]
    Failed(String),

    /// The planner backend is not reachable or not configured.
    #[error("Planner unavailable: {0}")]
    Unavailable(String),
}

/// Produces a [`Plan`] for a query.
#[async_trait]
pub trait Planner: Send + Sync {
    /// Plan tool invocations for `query` using only the given tools.
    async fn plan(&self, query: &str, tools: &[ToolDescriptor]) -> Result<Plan, PlannerError>;
}
