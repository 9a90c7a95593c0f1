//! Privacy settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Store a digest of the input instead of a preview. Default: true.
    pub hash_input_in_logs: Option<bool>,
    /// Refuse reviewer summaries unless double-blind mode is on. Default: true.
    pub preserve_double_blind: Option<bool>,
}

impl PrivacyConfig {
    pub fn effective_hash_input(&self) -> bool {
        self.hash_input_in_logs.unwrap_or(true)
    }

    pub fn effective_preserve_double_blind(&self) -> bool {
        self.preserve_double_blind.unwrap_or(true)
    }
}
