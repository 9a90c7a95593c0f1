use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feature::{AiFeature, UserRole};

/// One AI operation as written to the audit trail. The raw input is never
/// stored; only its fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub log_id: String,
    pub user_id: String,
    pub user_role: UserRole,
    pub feature: AiFeature,
    pub timestamp: DateTime<Utc>,
    /// BLAKE3 hex digest of the input, or a short preview when hashing is off.
    pub input_fingerprint: String,
    /// First 100 characters of the output, "..." appended when cut.
    pub output_preview: String,
    pub applied: bool,
    pub metadata: Option<serde_json::Value>,
}

/// Anything appended to the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEvent {
    Operation(AuditRecord),
    Error {
        timestamp: DateTime<Utc>,
        user_id: String,
        feature: AiFeature,
        message: String,
        metadata: Option<serde_json::Value>,
    },
    FeatureDisabled {
        timestamp: DateTime<Utc>,
        user_id: String,
        feature: AiFeature,
    },
}

impl AuditEvent {
    pub fn feature(&self) -> AiFeature {
        match self {
            Self::Operation(r) => r.feature,
            Self::Error { feature, .. } | Self::FeatureDisabled { feature, .. } => *feature,
        }
    }

    pub fn is_feature_disabled(&self) -> bool {
        matches!(self, Self::FeatureDisabled { .. })
    }

    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(_))
    }
}
