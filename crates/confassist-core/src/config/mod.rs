//! Configuration system for ConfAssist.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod assist_config;
pub mod audit_config;
pub mod features_config;
pub mod limits_config;
pub mod llm_config;
pub mod privacy_config;
pub mod service_config;

pub use assist_config::AssistConfig;
pub use audit_config::AuditConfig;
pub use features_config::{AuthorFeatureStatus, FeatureStatus, FeaturesConfig, ReviewerFeatureStatus};
pub use limits_config::LimitsConfig;
pub use llm_config::LlmConfig;
pub use privacy_config::PrivacyConfig;
pub use service_config::ServiceConfig;
