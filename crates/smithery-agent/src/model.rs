//! Model credentials and selection.

use smithery_core::{API_KEY_ENV, DEFAULT_MODEL_NAME};

use crate::error::AgentError;

/// Model the planner should run against.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelSettings {
    api_key: String,
    model_name: String,
}

impl ModelSettings {
    /// Resolve settings from explicit values, falling back to the process
    /// environment for the API key.
    pub fn resolve(api_key: Option<String>, model_name: Option<&str>) -> Result<Self, AgentError> {
        Self::resolve_with(api_key, model_name, |name| std::env::var(name).ok())
    }

    /// Resolve settings using `lookup` in place of the process environment.
    ///
    /// Empty values count as absent.
    pub fn resolve_with<F>(
        api_key: Option<String>,
        model_name: Option<&str>,
        lookup: F,
    ) -> Result<Self, AgentError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .or_else(|| lookup(API_KEY_ENV).filter(|key| !key.is_empty()))
            .ok_or(AgentError::MissingApiKey {
                env_var: API_KEY_ENV,
            })?;

        let model_name = model_name
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_MODEL_NAME)
            .to_string();

        Ok(Self {
            api_key,
            model_name,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl std::fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSettings")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}
