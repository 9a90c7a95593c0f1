use serde::{Deserialize, Serialize};

/// Key points extracted from an abstract. Missing points are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoints {
    pub research_problem: String,
    pub methodology: String,
    pub dataset: String,
    pub contributions: String,
}

/// Neutral reviewer summary of a paper abstract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub summary: String,
    pub key_points: KeyPoints,
    pub word_count: usize,
}
