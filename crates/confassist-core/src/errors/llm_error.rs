//! External assistant errors.

use super::error_code::{self, AssistErrorCode};

/// Failures of the optional LLM collaborator. None of these are fatal:
/// callers degrade to a deterministic fallback.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("assistant not configured: {reason}")]
    NotConfigured { reason: String },

    #[error("assistant request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("assistant HTTP error: {reason}")]
    Http { reason: String },

    #[error("assistant returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("assistant response malformed: {reason}")]
    MalformedResponse { reason: String },
}

impl LlmError {
    /// Short label recorded in audit metadata when a fallback is used.
    pub fn fallback_method(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } => "fallback",
            _ => "error",
        }
    }
}

impl AssistErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } | Self::Http { .. } | Self::Status { .. } => {
                error_code::LLM_UNAVAILABLE
            }
            Self::Timeout { .. } => error_code::LLM_TIMEOUT,
            Self::MalformedResponse { .. } => error_code::LLM_BAD_RESPONSE,
        }
    }
}
