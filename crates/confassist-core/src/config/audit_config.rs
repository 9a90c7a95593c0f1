//! Audit trail configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Write audit records. Default: true.
    pub enabled: Option<bool>,
    /// Append-only log file. Default: "logs/audit.log".
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_AUDIT_LOG_PATH))
    }
}
