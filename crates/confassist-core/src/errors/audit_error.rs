//! Audit sink errors.

use super::error_code::{self, AssistErrorCode};

/// Errors raised while opening or writing the audit log.
/// Write errors are swallowed by the sink; only construction surfaces them.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("cannot open audit log {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("cannot write audit record: {reason}")]
    Write { reason: String },
}

impl AssistErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        error_code::AUDIT_ERROR
    }
}
