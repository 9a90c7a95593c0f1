use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use confassist_core::config::AssistConfig;
use confassist_core::constants::{
    AUDIT_DISABLED_LOG_ID, AUDIT_INPUT_PREVIEW_CHARS, AUDIT_OUTPUT_PREVIEW_CHARS,
};
use confassist_core::models::{AiFeature, AuditEvent, AuditRecord, UserRole};
use confassist_core::traits::IAuditSink;

/// Length of a log id in hex characters.
const LOG_ID_LEN: usize = 16;

/// One finished AI operation, as handed to [`AuditLogger::log_operation`].
#[derive(Debug, Clone)]
pub struct OperationLog<'a> {
    pub user_id: &'a str,
    pub user_role: UserRole,
    pub feature: AiFeature,
    /// Raw input. Only its fingerprint is recorded.
    pub input: &'a str,
    pub output: Value,
    pub applied: bool,
    pub metadata: Option<Value>,
}

/// Keep the first `max` chars, appending "..." when something was cut.
fn preview(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// BLAKE3 hex digest of the input, or a 50-char preview when `hash` is off.
pub fn fingerprint(input: &str, hash: bool) -> String {
    if hash {
        blake3::hash(input.as_bytes()).to_hex().to_string()
    } else {
        preview(input, AUDIT_INPUT_PREVIEW_CHARS)
    }
}

/// First 100 chars of the output. Strings are used as is, anything else
/// as compact JSON.
pub fn preview_output(output: &Value) -> String {
    match output {
        Value::String(s) => preview(s, AUDIT_OUTPUT_PREVIEW_CHARS),
        other => preview(&other.to_string(), AUDIT_OUTPUT_PREVIEW_CHARS),
    }
}

/// Front end of the audit trail.
///
/// Honors `audit.enabled` and `privacy.hash_input_in_logs`. When logging is
/// off nothing reaches the sink and operations get the id `logging_disabled`.
#[derive(Clone)]
pub struct AuditLogger {
    sink: Arc<dyn IAuditSink>,
    enabled: bool,
    hash_input: bool,
}

impl AuditLogger {
    pub fn new(sink: Arc<dyn IAuditSink>) -> Self {
        Self {
            sink,
            enabled: true,
            hash_input: true,
        }
    }

    pub fn from_config(config: &AssistConfig, sink: Arc<dyn IAuditSink>) -> Self {
        Self {
            sink,
            enabled: config.audit.effective_enabled(),
            hash_input: config.privacy.effective_hash_input(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_hash_input(mut self, hash_input: bool) -> Self {
        self.hash_input = hash_input;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record an operation and return its log id.
    pub fn log_operation(&self, entry: OperationLog<'_>) -> String {
        if !self.enabled {
            return AUDIT_DISABLED_LOG_ID.to_string();
        }

        let timestamp = Utc::now();
        let seed = format!(
            "{}{}{}",
            entry.user_id,
            entry.feature,
            timestamp.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
        );
        let mut log_id = blake3::hash(seed.as_bytes()).to_hex().to_string();
        log_id.truncate(LOG_ID_LEN);

        let record = AuditRecord {
            log_id: log_id.clone(),
            user_id: entry.user_id.to_string(),
            user_role: entry.user_role,
            feature: entry.feature,
            timestamp,
            input_fingerprint: fingerprint(entry.input, self.hash_input),
            output_preview: preview_output(&entry.output),
            applied: entry.applied,
            metadata: entry.metadata.filter(|m| !is_empty_metadata(m)),
        };
        self.sink.append(&AuditEvent::Operation(record));
        log_id
    }

    /// Record a failed operation.
    pub fn log_error(
        &self,
        user_id: &str,
        feature: AiFeature,
        message: &str,
        metadata: Option<Value>,
    ) {
        if !self.enabled {
            return;
        }
        self.sink.append(&AuditEvent::Error {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            feature,
            message: message.to_string(),
            metadata: metadata.filter(|m| !is_empty_metadata(m)),
        });
    }

    /// Record an attempt to use a disabled feature.
    pub fn log_feature_disabled(&self, user_id: &str, feature: AiFeature) {
        if !self.enabled {
            return;
        }
        self.sink.append(&AuditEvent::FeatureDisabled {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            feature,
        });
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger")
            .field("enabled", &self.enabled)
            .field("hash_input", &self.hash_input)
            .finish_non_exhaustive()
    }
}

fn is_empty_metadata(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
