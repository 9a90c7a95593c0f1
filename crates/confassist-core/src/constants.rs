//! Shared constants for the ConfAssist service.

/// ConfAssist version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default service name reported by the health endpoint.
pub const DEFAULT_SERVICE_NAME: &str = "UTH-ConfMS AI Service";

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default audit log location.
pub const DEFAULT_AUDIT_LOG_PATH: &str = "logs/audit.log";

/// Maximum characters accepted for spellcheck text.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Maximum characters accepted for abstracts.
pub const DEFAULT_MAX_ABSTRACT_LENGTH: usize = 5_000;

/// Reviewer summary lower word bound.
pub const DEFAULT_SUMMARY_MIN_WORDS: usize = 150;

/// Reviewer summary upper word bound.
pub const DEFAULT_SUMMARY_MAX_WORDS: usize = 250;

/// Maximum suggested keywords per request.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Default chat model for the external assistant.
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

/// Default OpenAI-compatible endpoint of the external assistant.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default completion token limit for polishing.
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 2000;

/// Default sampling temperature for polishing.
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.7;

/// Default per-request timeout for the external assistant, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 20;

/// API key value shipped in sample `.env` files. Treated as unset.
pub const PLACEHOLDER_API_KEY: &str = "your_groq_api_key_here";

/// Characters of output kept in an audit record preview.
pub const AUDIT_OUTPUT_PREVIEW_CHARS: usize = 100;

/// Characters of input kept in an audit record when hashing is disabled.
pub const AUDIT_INPUT_PREVIEW_CHARS: usize = 50;

/// Log id returned when audit logging is switched off.
pub const AUDIT_DISABLED_LOG_ID: &str = "logging_disabled";
