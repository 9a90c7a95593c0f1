//! AssistErrorCode trait for the HTTP boundary.

/// Trait for mapping ConfAssist errors to stable error codes.
/// Every error enum implements this so the HTTP layer can expose a
/// structured code without leaking internal messages.
pub trait AssistErrorCode {
    /// Returns the error code string (e.g., "FEATURE_DISABLED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const FEATURE_DISABLED: &str = "FEATURE_DISABLED";
pub const DOUBLE_BLIND_REQUIRED: &str = "DOUBLE_BLIND_REQUIRED";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LLM_UNAVAILABLE: &str = "LLM_UNAVAILABLE";
pub const LLM_TIMEOUT: &str = "LLM_TIMEOUT";
pub const LLM_BAD_RESPONSE: &str = "LLM_BAD_RESPONSE";
pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const AUDIT_ERROR: &str = "AUDIT_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
