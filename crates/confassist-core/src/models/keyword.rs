use serde::{Deserialize, Serialize};

/// Where a keyword score came from. Scores are only comparable between
/// candidates with the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSource {
    Tfidf,
    Frequency,
}

/// A ranked keyword suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub text: String,
    /// Non-negative, relative within `source` only.
    pub score: f64,
    pub source: KeywordSource,
}

/// Strategy that produced an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Too few content tokens; unique tokens returned as-is.
    Degenerate,
    /// Segment-level TF-IDF over unigrams and bigrams.
    Tfidf,
    /// Token frequency over a single segment.
    Frequency,
    /// Simplified frequency pass after a vectorization failure.
    Fallback,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degenerate => "degenerate",
            Self::Tfidf => "tfidf",
            Self::Frequency => "frequency",
            Self::Fallback => "fallback",
        }
    }
}

/// Ranked keywords plus the strategy that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordExtraction {
    pub keywords: Vec<KeywordCandidate>,
    pub method: ExtractionMethod,
}

impl KeywordExtraction {
    pub fn texts(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.text.clone()).collect()
    }
}
