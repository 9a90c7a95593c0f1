//! OpenAI-compatible chat completion client (Groq by default).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use confassist_core::config::LlmConfig;
use confassist_core::errors::LlmError;
use confassist_core::traits::{ContextualSuggestion, IAbstractPolisher, IContextualCorrector};

use crate::parse::parse_suggestions;
use crate::prompts;

/// Sampling settings for contextual checks. Kept low and short so the
/// reply stays a compact JSON object.
const CONTEXTUAL_TEMPERATURE: f32 = 0.3;
const CONTEXTUAL_MAX_TOKENS: u32 = 500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completion client.
///
/// Calls are blocking; the server runs them on the blocking thread pool.
#[derive(Clone)]
pub struct GroqClient {
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl GroqClient {
    /// Build from config. Returns `None` when no usable API key is set.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.effective_api_key()?.to_string();
        Some(Self {
            api_key,
            model: config.effective_model().to_string(),
            endpoint: format!(
                "{}/chat/completions",
                config.effective_base_url().trim_end_matches('/')
            ),
            max_tokens: config.effective_max_tokens(),
            temperature: config.effective_temperature(),
            timeout: config.effective_timeout(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one system + user exchange and return the reply text.
    fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LlmError::Http {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                self.request_error(e)
            } else {
                LlmError::MalformedResponse {
                    reason: format!("JSON parse error: {e}"),
                }
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse {
                reason: "response has no message content".to_string(),
            })
    }

    fn request_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            LlmError::Http {
                reason: e.to_string(),
            }
        }
    }
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl IContextualCorrector for GroqClient {
    fn suggest_corrections(&self, text: &str) -> Result<Vec<ContextualSuggestion>, LlmError> {
        let reply = self.complete(
            prompts::CONTEXTUAL_SYSTEM,
            &prompts::contextual_prompt(text),
            CONTEXTUAL_TEMPERATURE,
            CONTEXTUAL_MAX_TOKENS,
        )?;
        let suggestions = parse_suggestions(&reply)?;
        tracing::debug!(count = suggestions.len(), "contextual suggestions received");
        Ok(suggestions)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.model
    }
}

impl IAbstractPolisher for GroqClient {
    fn polish(&self, text: &str) -> Result<String, LlmError> {
        let reply = self.complete(
            prompts::POLISH_SYSTEM,
            &prompts::polish_prompt(text),
            self.temperature,
            self.max_tokens,
        )?;
        let polished = reply.trim();
        if polished.is_empty() {
            return Err(LlmError::MalformedResponse {
                reason: "empty completion".to_string(),
            });
        }
        Ok(polished.to_string())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_key_yields_none() {
        assert!(GroqClient::from_config(&LlmConfig::default()).is_none());
        let placeholder = LlmConfig {
            api_key: Some("your_groq_api_key_here".to_string()),
            ..Default::default()
        };
        assert!(GroqClient::from_config(&placeholder).is_none());
    }

    #[test]
    fn endpoint_joins_base_url() {
        let config = LlmConfig {
            api_key: Some("k".to_string()),
            base_url: Some("http://localhost:9/v1/".to_string()),
            ..Default::default()
        };
        let client = GroqClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/v1/chat/completions");
        assert_eq!(client.model(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn debug_hides_api_key() {
        let config = LlmConfig {
            api_key: Some("secret-key".to_string()),
            ..Default::default()
        };
        let client = GroqClient::from_config(&config).unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }
}
