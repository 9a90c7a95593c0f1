//! Reviewer-facing features: neutral summaries and expertise similarity.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;

use confassist_audit::{AuditLogger, OperationLog};
use confassist_core::errors::{ServiceError, ServiceResult};
use confassist_core::models::api::{
    ReviewerSummaryRequest, ReviewerSummaryResponse, SimilarityRequest, SimilarityResponse,
};
use confassist_core::models::{AiFeature, UserRole};
use confassist_core::tracing::events;
use confassist_core::AssistConfig;
use confassist_reviewer::{explain, score, Summarizer};

use crate::guard::{ensure_enabled, ensure_max_chars};

/// Deterministic aids for reviewers. Requests carry no author identity.
#[derive(Debug)]
pub struct ReviewerService {
    config: Arc<AssistConfig>,
    summarizer: Summarizer,
    audit: AuditLogger,
}

impl ReviewerService {
    pub fn new(config: Arc<AssistConfig>, audit: AuditLogger) -> Self {
        let summarizer = Summarizer::new(
            config.limits.effective_summary_min_words(),
            config.limits.effective_summary_max_words(),
        );
        Self {
            config,
            summarizer,
            audit,
        }
    }

    /// Neutral summary and key points of an abstract.
    ///
    /// Refuses to run unless double-blind mode is on.
    pub fn summarize(
        &self,
        request: &ReviewerSummaryRequest,
    ) -> ServiceResult<ReviewerSummaryResponse> {
        let feature = AiFeature::ReviewerSummary;
        ensure_enabled(&self.config, &self.audit, feature, &request.reviewer_id)?;
        if !self.config.privacy.effective_preserve_double_blind() {
            return Err(ServiceError::DoubleBlindRequired);
        }
        ensure_max_chars(
            "paper_abstract",
            &request.paper_abstract,
            self.config.limits.effective_max_abstract_length(),
        )?;

        let started = Instant::now();
        let summary = self
            .summarizer
            .summarize(&request.paper_abstract, &request.paper_keywords);

        self.audit.log_operation(OperationLog {
            user_id: &request.reviewer_id,
            user_role: UserRole::Reviewer,
            feature,
            input: &request.paper_abstract,
            output: json!({ "summary_length": summary.word_count }),
            applied: false,
            metadata: Some(json!({ "paper_id": request.paper_id })),
        });
        events::operation_completed(feature, summary.word_count, elapsed_ms(started));

        Ok(ReviewerSummaryResponse {
            summary: summary.summary,
            key_points: summary.key_points,
            word_count: summary.word_count,
        })
    }

    /// How well the reviewer's expertise matches the paper.
    pub fn similarity(&self, request: &SimilarityRequest) -> ServiceResult<SimilarityResponse> {
        let feature = AiFeature::ReviewerSimilarity;
        ensure_enabled(&self.config, &self.audit, feature, &request.reviewer_id)?;

        let started = Instant::now();
        let result = score(
            &request.reviewer_expertise,
            &request.paper_keywords,
            &request.paper_abstract,
        );
        let recommendation = result.tier.recommendation();

        self.audit.log_operation(OperationLog {
            user_id: &request.reviewer_id,
            user_role: UserRole::Reviewer,
            feature,
            input: &request.paper_abstract,
            output: json!({
                "similarity_score": result.score,
                "recommendation": recommendation,
            }),
            applied: false,
            metadata: None,
        });
        events::operation_completed(feature, result.matching_topics.len(), elapsed_ms(started));

        Ok(SimilarityResponse {
            similarity_score: result.score,
            explanation: explain(&result),
            recommendation: recommendation.to_string(),
            matching_topics: result.matching_topics,
        })
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
