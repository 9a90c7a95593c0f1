//! Structured log events for key service operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::AiFeature;

/// A caller hit a disabled feature.
pub fn feature_denied(feature: AiFeature, user_id: &str) {
    tracing::warn!(
        event = "feature_denied",
        feature = %feature,
        user_id = %user_id,
        "feature disabled"
    );
}

/// An optional collaborator failed and a fallback was used.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// A feature operation finished.
pub fn operation_completed(feature: AiFeature, items: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "operation_completed",
        feature = %feature,
        items = items,
        elapsed_ms = elapsed_ms,
        "operation completed"
    );
}
