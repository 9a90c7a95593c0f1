//! Error handling for ConfAssist.
//! One error enum per subsystem, `thiserror` only.

pub mod audit_error;
pub mod config_error;
pub mod error_code;
pub mod extraction_error;
pub mod llm_error;
pub mod service_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::AssistErrorCode;
pub use extraction_error::ExtractionError;
pub use llm_error::LlmError;
pub use service_error::{ServiceError, ServiceResult};
