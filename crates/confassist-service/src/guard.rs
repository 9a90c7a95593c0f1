//! Checks every operation runs before doing any work.

use confassist_audit::AuditLogger;
use confassist_core::errors::{ServiceError, ServiceResult};
use confassist_core::models::AiFeature;
use confassist_core::tracing::events;
use confassist_core::AssistConfig;

/// Fail with `FeatureDisabled` (and audit the attempt) when `feature` is off.
pub fn ensure_enabled(
    config: &AssistConfig,
    audit: &AuditLogger,
    feature: AiFeature,
    user_id: &str,
) -> ServiceResult<()> {
    if config.is_enabled(feature) {
        return Ok(());
    }
    audit.log_feature_disabled(user_id, feature);
    events::feature_denied(feature, user_id);
    Err(ServiceError::FeatureDisabled { feature })
}

/// Reject `value` when it has more than `max` characters.
pub fn ensure_max_chars(field: &str, value: &str, max: usize) -> ServiceResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ServiceError::Validation {
            field: field.to_string(),
            message: format!("must be at most {max} characters (got {len})"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_counts_chars_not_bytes() {
        // 5 chars, 10+ bytes.
        assert!(ensure_max_chars("text", "đường", 5).is_ok());
        let err = ensure_max_chars("text", "đường!", 5).unwrap_err();
        match err {
            ServiceError::Validation { field, message } => {
                assert_eq!(field, "text");
                assert!(message.contains("at most 5"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
