//! Service identity and HTTP binding.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name reported by the health endpoint.
    pub name: Option<String>,
    /// Address the HTTP server binds to. Default: "0.0.0.0:8000".
    pub bind_addr: Option<String>,
    /// Emit JSON logs instead of human-readable ones.
    pub json_logs: Option<bool>,
}

impl ServiceConfig {
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(constants::DEFAULT_SERVICE_NAME)
    }

    pub fn effective_bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(constants::DEFAULT_BIND_ADDR)
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(false)
    }
}
