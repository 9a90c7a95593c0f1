//! # confassist-core
//!
//! Foundation crate for the ConfAssist AI support module.
//! Defines the shared models, collaborator traits, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::AssistConfig;
pub use errors::{AssistErrorCode, ServiceError, ServiceResult};
pub use models::{AiFeature, CorrectionEntry, CorrectionKind, UserRole};
