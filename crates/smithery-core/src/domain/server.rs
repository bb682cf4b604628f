//! Installed MCP server records.
//!
//! The registry is shared by reference between the agent shell and the
//! server manager tool. Every clone of a [`ServerRegistry`] observes and
//! mutates the same underlying map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Placeholder process id assigned to started servers.
///
/// No real process is spawned on start; this value only marks the record.
pub const SIMULATED_PID: u32 = 12345;

/// Free-form server configuration (string keys, arbitrary JSON values).
pub type ServerConfigMap = Map<String, Value>;

/// Runtime status of an installed MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    /// Server was started and not stopped since.
    Running,
    /// Server was stopped.
    Stopped,
}

impl ServerStatus {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State kept for one installed MCP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Current status.
    pub status: ServerStatus,
    /// Configuration supplied on start or on the last configure.
    pub config: ServerConfigMap,
    /// Opaque process handle (simulated).
    pub pid: u32,
    /// When the server was last started.
    pub started_at: DateTime<Utc>,
}

impl ServerRecord {
    /// Create a record for a freshly started server.
    #[must_use]
    pub fn running(config: ServerConfigMap) -> Self {
        Self {
            status: ServerStatus::Running,
            config,
            pid: SIMULATED_PID,
            started_at: Utc::now(),
        }
    }
}

/// Shared mapping from server name to [`ServerRecord`].
///
/// Cloning is cheap and yields a handle onto the same map. Reads and writes
/// go through an async `RwLock` so the registry can be used from concurrent
/// tool invocations.
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    servers: Arc<RwLock<BTreeMap<String, ServerRecord>>>,
}

impl ServerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record, returning the previous one.
    pub async fn insert(&self, name: impl Into<String>, record: ServerRecord) -> Option<ServerRecord> {
        self.servers.write().await.insert(name.into(), record)
    }

    /// Get a copy of the record for `name`.
    pub async fn get(&self, name: &str) -> Option<ServerRecord> {
        self.servers.read().await.get(name).cloned()
    }

    /// Check whether `name` is present.
    pub async fn contains(&self, name: &str) -> bool {
        self.servers.read().await.contains_key(name)
    }

    /// Set the status of an existing record.
    ///
    /// Returns `false` if `name` is not present.
    pub async fn set_status(&self, name: &str, status: ServerStatus) -> bool {
        let mut servers = self.servers.write().await;
        match servers.get_mut(name) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    /// Replace the whole config of an existing record.
    ///
    /// Keys absent from `config` are dropped. Returns `false` if `name` is not
    /// present.
    pub async fn replace_config(&self, name: &str, config: ServerConfigMap) -> bool {
        let mut servers = self.servers.write().await;
        match servers.get_mut(name) {
            Some(record) => {
                record.config = config;
                true
            }
            None => false,
        }
    }

    /// Names of all known servers, sorted.
    pub async fn names(&self) -> Vec<String> {
        self.servers.read().await.keys().cloned().collect()
    }

    /// Copy of the full map.
    pub async fn snapshot(&self) -> BTreeMap<String, ServerRecord> {
        self.servers.read().await.clone()
    }

    /// Number of known servers.
    pub async fn len(&self) -> usize {
        self.servers.read().await.len()
    }

    /// Whether no server has been started yet.
    pub async fn is_empty(&self) -> bool {
        self.servers.read().await.is_empty()
    }

    /// Whether two handles point at the same map.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.servers, &other.servers)
    }
}
