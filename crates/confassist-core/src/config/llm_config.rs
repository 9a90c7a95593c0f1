//! External assistant (OpenAI-compatible chat API) settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LlmConfig {
    /// Bearer key. Empty or the sample placeholder means "not configured".
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Per-request timeout in seconds. Default: 20.
    pub timeout_secs: Option<u64>,
}

impl LlmConfig {
    /// The API key, if one is usable.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != constants::PLACEHOLDER_API_KEY)
    }

    pub fn is_configured(&self) -> bool {
        self.effective_api_key().is_some()
    }

    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(constants::DEFAULT_LLM_MODEL)
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(constants::DEFAULT_LLM_BASE_URL)
    }

    pub fn effective_max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(constants::DEFAULT_LLM_MAX_TOKENS)
    }

    pub fn effective_temperature(&self) -> f32 {
        self.temperature
            .unwrap_or(constants::DEFAULT_LLM_TEMPERATURE)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(constants::DEFAULT_LLM_TIMEOUT_SECS),
        )
    }
}
