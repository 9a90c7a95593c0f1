//! Per-deployment feature flags.

use serde::{Deserialize, Serialize};

use crate::models::AiFeature;

/// One switch per AI capability. Every flag defaults to enabled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeaturesConfig {
    pub author_spellcheck: Option<bool>,
    pub author_abstract_polishing: Option<bool>,
    pub author_keyword_suggestion: Option<bool>,
    pub reviewer_summary: Option<bool>,
    pub reviewer_similarity: Option<bool>,
}

impl FeaturesConfig {
    /// Returns whether `feature` is switched on.
    pub fn is_enabled(&self, feature: AiFeature) -> bool {
        let flag = match feature {
            AiFeature::AuthorSpellcheck => self.author_spellcheck,
            AiFeature::AuthorPolish => self.author_abstract_polishing,
            AiFeature::AuthorKeywords => self.author_keyword_suggestion,
            AiFeature::ReviewerSummary => self.reviewer_summary,
            AiFeature::ReviewerSimilarity => self.reviewer_similarity,
        };
        flag.unwrap_or(true)
    }

    /// Set a single flag.
    pub fn set(&mut self, feature: AiFeature, enabled: bool) {
        let slot = match feature {
            AiFeature::AuthorSpellcheck => &mut self.author_spellcheck,
            AiFeature::AuthorPolish => &mut self.author_abstract_polishing,
            AiFeature::AuthorKeywords => &mut self.author_keyword_suggestion,
            AiFeature::ReviewerSummary => &mut self.reviewer_summary,
            AiFeature::ReviewerSimilarity => &mut self.reviewer_similarity,
        };
        *slot = Some(enabled);
    }
}

/// Feature report served by `GET /api/ai/features`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub author_features: AuthorFeatureStatus,
    pub reviewer_features: ReviewerFeatureStatus,
    pub audit_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorFeatureStatus {
    pub spellcheck: bool,
    pub abstract_polishing: bool,
    pub keyword_suggestion: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerFeatureStatus {
    pub summary: bool,
    pub similarity: bool,
}
