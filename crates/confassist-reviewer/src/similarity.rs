//! Reviewer/paper similarity.
//!
//! `score = min(1, 0.6 * keyword_score + 0.4 * content_score)` where
//! `keyword_score` counts equal or substring-related topic pairs over the
//! longer topic list and `content_score` is the share of reviewer topics
//! found in the paper text.

use std::collections::BTreeSet;

use confassist_core::models::{MatchTier, SimilarityResult};

const KEYWORD_WEIGHT: f64 = 0.6;
const CONTENT_WEIGHT: f64 = 0.4;

fn clean_topics(topics: &[String]) -> Vec<String> {
    topics
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Round to three decimals, the precision sent to clients.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Score reviewer expertise against a paper's keywords and text.
///
/// The returned `score` is rounded to three decimals and the tier is taken
/// from that rounded value, so the two always agree.
pub fn score(reviewer_topics: &[String], paper_topics: &[String], paper_text: &str) -> SimilarityResult {
    let reviewer = clean_topics(reviewer_topics);
    let paper = clean_topics(paper_topics);
    let text = paper_text.to_lowercase();

    let mut matches = 0usize;
    let mut matching_topics = BTreeSet::new();
    for r in &reviewer {
        for p in &paper {
            if r == p || r.contains(p.as_str()) || p.contains(r.as_str()) {
                matches += 1;
                matching_topics.insert(p.clone());
            }
        }
    }

    let keyword_score = if reviewer.is_empty() || paper.is_empty() {
        0.0
    } else {
        matches as f64 / reviewer.len().max(paper.len()) as f64
    };

    let content_score = if reviewer.is_empty() {
        0.0
    } else {
        let found = reviewer.iter().filter(|r| text.contains(r.as_str())).count();
        found as f64 / reviewer.len() as f64
    };

    let combined = (KEYWORD_WEIGHT * keyword_score + CONTENT_WEIGHT * content_score).min(1.0);
    let score = round3(combined);

    SimilarityResult {
        score,
        keyword_score,
        content_score,
        matching_topics: matching_topics.into_iter().collect(),
        tier: MatchTier::from_score(score),
    }
}

/// Reviewer-facing explanation for a result.
pub fn explain(result: &SimilarityResult) -> String {
    let n = result.matching_topics.len();
    match result.tier {
        MatchTier::High => format!(
            "Strong alignment detected. {n} matching topics found. \
             Your expertise closely matches the paper's focus areas."
        ),
        MatchTier::Moderate => format!(
            "Partial alignment detected. {n} matching topics found. \
             You have relevant expertise for reviewing this paper."
        ),
        MatchTier::Low => format!(
            "Limited alignment detected. {n} matching topics found. \
             The paper may be outside your primary expertise areas."
        ),
    }
}
