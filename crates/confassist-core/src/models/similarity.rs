use serde::{Deserialize, Serialize};

/// Reviewer/paper match tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Moderate,
    Low,
}

impl MatchTier {
    /// Tier for a combined score: >= 0.7 high, >= 0.4 moderate, else low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Recommendation label shown to reviewers.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::High => "High match",
            Self::Moderate => "Moderate match",
            Self::Low => "Low match",
        }
    }
}

/// Outcome of comparing reviewer expertise with a paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Weighted score in [0, 1].
    pub score: f64,
    pub keyword_score: f64,
    pub content_score: f64,
    /// Deduplicated, sorted.
    pub matching_topics: Vec<String>,
    pub tier: MatchTier,
}
