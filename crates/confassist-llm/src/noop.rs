use confassist_core::errors::LlmError;
use confassist_core::traits::{ContextualSuggestion, IAbstractPolisher, IContextualCorrector};

/// Assistant for environments without network access or credentials.
/// Every call fails with `LlmError::NotConfigured`.
#[derive(Debug, Clone)]
pub struct NoopAssistant {
    reason: String,
}

impl NoopAssistant {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn declined(&self) -> LlmError {
        LlmError::NotConfigured {
            reason: self.reason.clone(),
        }
    }
}

impl IContextualCorrector for NoopAssistant {
    fn suggest_corrections(&self, _text: &str) -> Result<Vec<ContextualSuggestion>, LlmError> {
        Err(self.declined())
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "noop"
    }
}

impl IAbstractPolisher for NoopAssistant {
    fn polish(&self, _text: &str) -> Result<String, LlmError> {
        Err(self.declined())
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "noop"
    }
}
