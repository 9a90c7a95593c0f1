use serde::{Deserialize, Serialize};

use crate::errors::LlmError;

/// A correction proposed by the external assistant. It carries no offset;
/// the corrector locates `original` in the text itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualSuggestion {
    pub original: String,
    #[serde(alias = "suggested")]
    pub correct: String,
    #[serde(default)]
    pub context: String,
}

/// Context-aware spelling suggestions (e.g. "phương pháp moi" -> "mới").
pub trait IContextualCorrector: Send + Sync {
    /// Suggest corrections for `text`.
    fn suggest_corrections(&self, text: &str) -> Result<Vec<ContextualSuggestion>, LlmError>;

    /// Whether a call has any chance of succeeding.
    fn is_available(&self) -> bool;

    /// Provider name for logs and audit metadata.
    fn name(&self) -> &str;
}

/// Academic-style rewriting of an abstract.
pub trait IAbstractPolisher: Send + Sync {
    /// Return the polished text.
    fn polish(&self, text: &str) -> Result<String, LlmError>;

    fn is_available(&self) -> bool;

    fn name(&self) -> &str;
}
