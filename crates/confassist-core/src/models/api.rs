//! Request and response contracts of the HTTP surface.
//!
//! Every response that carries a suggestion has `applied: false`; the
//! human confirms elsewhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::correction::CorrectionEntry;
use super::summary::KeyPoints;
use crate::config::FeatureStatus;

// ── Author ────────────────────────────────────────────────────────────────

/// Spell and diacritic check for a title, abstract, or keyword field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCheckRequest {
    pub text: String,
    pub user_id: String,
    /// "title", "abstract", or "keywords". Recorded in the audit metadata.
    pub field_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCheckResponse {
    pub original_text: String,
    pub suggested_text: String,
    pub corrections: Vec<CorrectionEntry>,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolishRequest {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub user_id: String,
}

/// Side-by-side polishing result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolishResponse {
    pub original_abstract: String,
    pub polished_abstract: String,
    pub improvements: Vec<String>,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSuggestionRequest {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub user_id: String,
    #[serde(default)]
    pub existing_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSuggestionResponse {
    pub suggested_keywords: Vec<String>,
    /// keyword -> confidence
    pub confidence_scores: BTreeMap<String, f64>,
    pub applied: bool,
}

// ── Reviewer ──────────────────────────────────────────────────────────────

/// Summary request. Carries no author identity and rejects any extra
/// field, so names, emails, or affiliations cannot be smuggled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewerSummaryRequest {
    pub paper_abstract: String,
    #[serde(default)]
    pub paper_keywords: Vec<String>,
    pub reviewer_id: String,
    pub paper_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewerSummaryResponse {
    pub summary: String,
    pub key_points: KeyPoints,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub reviewer_id: String,
    pub reviewer_expertise: Vec<String>,
    pub paper_keywords: Vec<String>,
    pub paper_abstract: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity_score: f64,
    pub matching_topics: Vec<String>,
    pub explanation: String,
    pub recommendation: String,
}

// ── General ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub features_enabled: FeatureStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub feature: Option<String>,
}
