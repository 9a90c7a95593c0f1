//! Input and output size limits.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max characters of spellcheck text. Default: 10000.
    pub max_text_length: Option<usize>,
    /// Max characters of an abstract. Default: 5000.
    pub max_abstract_length: Option<usize>,
    /// Reviewer summary lower bound in words. Default: 150.
    pub summary_min_words: Option<usize>,
    /// Reviewer summary upper bound in words. Default: 250.
    pub summary_max_words: Option<usize>,
    /// Max suggested keywords. Default: 10.
    pub max_keywords: Option<usize>,
}

impl LimitsConfig {
    pub fn effective_max_text_length(&self) -> usize {
        self.max_text_length
            .unwrap_or(constants::DEFAULT_MAX_TEXT_LENGTH)
    }

    pub fn effective_max_abstract_length(&self) -> usize {
        self.max_abstract_length
            .unwrap_or(constants::DEFAULT_MAX_ABSTRACT_LENGTH)
    }

    pub fn effective_summary_min_words(&self) -> usize {
        self.summary_min_words
            .unwrap_or(constants::DEFAULT_SUMMARY_MIN_WORDS)
    }

    pub fn effective_summary_max_words(&self) -> usize {
        self.summary_max_words
            .unwrap_or(constants::DEFAULT_SUMMARY_MAX_WORDS)
    }

    pub fn effective_max_keywords(&self) -> usize {
        self.max_keywords.unwrap_or(constants::DEFAULT_MAX_KEYWORDS)
    }
}
