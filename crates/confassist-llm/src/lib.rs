//! # confassist-llm
//!
//! The optional external assistant. [`GroqClient`] talks to an
//! OpenAI-compatible `chat/completions` endpoint; [`NoopAssistant`] stands
//! in when no API key is configured. Both implement the narrow collaborator
//! traits from `confassist-core`, so callers never depend on the network.

pub mod groq;
pub mod noop;
pub mod parse;
pub mod prompts;

use std::sync::Arc;

use confassist_core::config::LlmConfig;
use confassist_core::traits::{IAbstractPolisher, IContextualCorrector};

pub use groq::GroqClient;
pub use noop::NoopAssistant;

/// The two assistant capabilities, ready to inject.
#[derive(Clone)]
pub struct Assistants {
    pub corrector: Arc<dyn IContextualCorrector>,
    pub polisher: Arc<dyn IAbstractPolisher>,
}

impl Assistants {
    /// Offline assistants that always decline.
    pub fn offline(reason: impl Into<String>) -> Self {
        let noop = Arc::new(NoopAssistant::new(reason));
        Self {
            corrector: noop.clone(),
            polisher: noop,
        }
    }
}

impl std::fmt::Debug for Assistants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistants")
            .field("corrector", &self.corrector.name())
            .field("polisher", &self.polisher.name())
            .finish()
    }
}

/// Networked assistants when an API key is configured, offline otherwise.
pub fn build_assistants(config: &LlmConfig) -> Assistants {
    match GroqClient::from_config(config) {
        Some(client) => {
            tracing::info!(model = client.model(), "external assistant configured");
            let client = Arc::new(client);
            Assistants {
                corrector: client.clone(),
                polisher: client,
            }
        }
        None => {
            tracing::info!("no assistant API key; contextual checks and polishing disabled");
            Assistants::offline("API key not configured")
        }
    }
}
