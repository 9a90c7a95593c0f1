//! Top-level ConfAssist configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AuditConfig, AuthorFeatureStatus, FeatureStatus, FeaturesConfig, LimitsConfig, LlmConfig,
    PrivacyConfig, ReviewerFeatureStatus, ServiceConfig,
};
use crate::errors::ConfigError;
use crate::models::AiFeature;

/// Name of the project-level config file looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "confassist.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONFASSIST_*`, plus `GROQ_API_KEY`)
/// 2. Project config (`confassist.toml` in the root directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssistConfig {
    pub service: ServiceConfig,
    pub features: FeaturesConfig,
    pub audit: AuditConfig,
    pub privacy: PrivacyConfig,
    pub limits: LimitsConfig,
    pub llm: LlmConfig,
}

impl AssistConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AssistConfig) -> Result<(), ConfigError> {
        if let Some(t) = config.llm.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::ValidationFailed {
                    field: "llm.temperature".to_string(),
                    message: "must be between 0.0 and 2.0".to_string(),
                });
            }
        }
        if config.llm.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "llm.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.limits.max_keywords == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "limits.max_keywords".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.limits.max_text_length == Some(0)
            || config.limits.max_abstract_length == Some(0)
        {
            return Err(ConfigError::ValidationFailed {
                field: "limits".to_string(),
                message: "length limits must be greater than 0".to_string(),
            });
        }
        let min = config.limits.effective_summary_min_words();
        let max = config.limits.effective_summary_max_words();
        if min > max {
            return Err(ConfigError::ValidationFailed {
                field: "limits.summary_min_words".to_string(),
                message: format!("must not exceed summary_max_words ({max})"),
            });
        }
        Ok(())
    }

    /// Whether `feature` is switched on.
    pub fn is_enabled(&self, feature: AiFeature) -> bool {
        self.features.is_enabled(feature)
    }

    /// Current status of all features.
    pub fn feature_status(&self) -> FeatureStatus {
        FeatureStatus {
            author_features: AuthorFeatureStatus {
                spellcheck: self.is_enabled(AiFeature::AuthorSpellcheck),
                abstract_polishing: self.is_enabled(AiFeature::AuthorPolish),
                keyword_suggestion: self.is_enabled(AiFeature::AuthorKeywords),
            },
            reviewer_features: ReviewerFeatureStatus {
                summary: self.is_enabled(AiFeature::ReviewerSummary),
                similarity: self.is_enabled(AiFeature::ReviewerSimilarity),
            },
            audit_logging: self.audit.effective_enabled(),
        }
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AssistConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AssistConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut AssistConfig, other: &AssistConfig) {
        // Service
        overlay(&mut base.service.name, &other.service.name);
        overlay(&mut base.service.bind_addr, &other.service.bind_addr);
        overlay(&mut base.service.json_logs, &other.service.json_logs);

        // Features
        overlay(&mut base.features.author_spellcheck, &other.features.author_spellcheck);
        overlay(
            &mut base.features.author_abstract_polishing,
            &other.features.author_abstract_polishing,
        );
        overlay(
            &mut base.features.author_keyword_suggestion,
            &other.features.author_keyword_suggestion,
        );
        overlay(&mut base.features.reviewer_summary, &other.features.reviewer_summary);
        overlay(&mut base.features.reviewer_similarity, &other.features.reviewer_similarity);

        // Audit
        overlay(&mut base.audit.enabled, &other.audit.enabled);
        overlay(&mut base.audit.path, &other.audit.path);

        // Privacy
        overlay(&mut base.privacy.hash_input_in_logs, &other.privacy.hash_input_in_logs);
        overlay(
            &mut base.privacy.preserve_double_blind,
            &other.privacy.preserve_double_blind,
        );

        // Limits
        overlay(&mut base.limits.max_text_length, &other.limits.max_text_length);
        overlay(&mut base.limits.max_abstract_length, &other.limits.max_abstract_length);
        overlay(&mut base.limits.summary_min_words, &other.limits.summary_min_words);
        overlay(&mut base.limits.summary_max_words, &other.limits.summary_max_words);
        overlay(&mut base.limits.max_keywords, &other.limits.max_keywords);

        // LLM
        overlay(&mut base.llm.api_key, &other.llm.api_key);
        overlay(&mut base.llm.model, &other.llm.model);
        overlay(&mut base.llm.base_url, &other.llm.base_url);
        overlay(&mut base.llm.max_tokens, &other.llm.max_tokens);
        overlay(&mut base.llm.temperature, &other.llm.temperature);
        overlay(&mut base.llm.timeout_secs, &other.llm.timeout_secs);
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONFASSIST_ENABLE_AUTHOR_SPELLCHECK`, `CONFASSIST_LLM_MODEL`, etc.
    fn apply_env_overrides(config: &mut AssistConfig) {
        let flags = [
            ("CONFASSIST_ENABLE_AUTHOR_SPELLCHECK", AiFeature::AuthorSpellcheck),
            ("CONFASSIST_ENABLE_AUTHOR_ABSTRACT_POLISHING", AiFeature::AuthorPolish),
            ("CONFASSIST_ENABLE_AUTHOR_KEYWORD_SUGGESTION", AiFeature::AuthorKeywords),
            ("CONFASSIST_ENABLE_REVIEWER_SUMMARY", AiFeature::ReviewerSummary),
            ("CONFASSIST_ENABLE_REVIEWER_SIMILARITY", AiFeature::ReviewerSimilarity),
        ];
        for (key, feature) in flags {
            if let Some(v) = env_parse::<bool>(key) {
                config.features.set(feature, v);
            }
        }

        if let Some(v) = env_parse::<bool>("CONFASSIST_ENABLE_AUDIT_LOGGING") {
            config.audit.enabled = Some(v);
        }
        if let Ok(val) = std::env::var("CONFASSIST_AUDIT_LOG_PATH") {
            config.audit.path = Some(val.into());
        }
        if let Some(v) = env_parse::<bool>("CONFASSIST_HASH_INPUT_IN_LOGS") {
            config.privacy.hash_input_in_logs = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CONFASSIST_PRESERVE_DOUBLE_BLIND") {
            config.privacy.preserve_double_blind = Some(v);
        }
        if let Ok(val) = std::env::var("CONFASSIST_BIND_ADDR") {
            config.service.bind_addr = Some(val);
        }
        if let Some(v) = env_parse::<usize>("CONFASSIST_MAX_KEYWORDS") {
            config.limits.max_keywords = Some(v);
        }

        // GROQ_API_KEY is the conventional name in existing deployments.
        if let Ok(val) = std::env::var("GROQ_API_KEY") {
            config.llm.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("CONFASSIST_LLM_API_KEY") {
            config.llm.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("CONFASSIST_LLM_MODEL") {
            config.llm.model = Some(val);
        }
        if let Ok(val) = std::env::var("CONFASSIST_LLM_BASE_URL") {
            config.llm.base_url = Some(val);
        }
        if let Some(v) = env_parse::<u64>("CONFASSIST_LLM_TIMEOUT_SECS") {
            config.llm.timeout_secs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        base.clone_from(other);
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
