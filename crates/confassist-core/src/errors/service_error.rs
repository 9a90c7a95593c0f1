//! Service-level errors surfaced to API callers.

use super::error_code::{self, AssistErrorCode};
use super::AuditError;
use crate::models::AiFeature;

/// Errors a feature operation can return to its caller.
/// Assistant and extraction failures are absorbed before this level.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{} feature is disabled", .feature.display_name())]
    FeatureDisabled { feature: AiFeature },

    #[error("double-blind review mode must be enabled")]
    DoubleBlindRequired,

    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ServiceError {
    /// Feature the error relates to, when there is one.
    pub fn feature(&self) -> Option<AiFeature> {
        match self {
            Self::FeatureDisabled { feature } => Some(*feature),
            _ => None,
        }
    }
}

impl AssistErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FeatureDisabled { .. } => error_code::FEATURE_DISABLED,
            Self::DoubleBlindRequired => error_code::DOUBLE_BLIND_REQUIRED,
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Audit(e) => e.error_code(),
            Self::Internal { .. } => error_code::INTERNAL_ERROR,
        }
    }
}

/// Convenience alias used by the service crates.
pub type ServiceResult<T> = Result<T, ServiceError>;
