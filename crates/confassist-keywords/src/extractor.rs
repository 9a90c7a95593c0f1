use std::collections::HashSet;
use std::sync::Arc;

use confassist_core::constants::DEFAULT_MAX_KEYWORDS;
use confassist_core::errors::ExtractionError;
use confassist_core::models::{ExtractionMethod, KeywordCandidate, KeywordExtraction, KeywordSource};
use confassist_core::tracing::events;
use confassist_lexicon::{tokenize, Lexicon};

use crate::frequency::{most_common, unique_in_order};
use crate::segment::split_segments;
use crate::tfidf::{TfidfModel, MAX_FEATURES};
use crate::{FALLBACK_CONFIDENCE, LOW_CONFIDENCE};

/// Below this many content tokens the text is returned nearly as-is.
const MIN_CONTENT_TOKENS: usize = 5;
/// Cap for the degenerate and fallback strategies.
const SMALL_CAP: usize = 5;
/// Weighted candidates considered before stopword filtering.
const TOP_CANDIDATES: usize = 15;

/// Keyword suggestion over a shared [`Lexicon`].
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    lexicon: Arc<Lexicon>,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords.max(1);
        self
    }

    /// Suggest keywords for `text`, skipping any in `existing`.
    ///
    /// Strategy chain:
    /// 1. fewer than 5 content tokens: unique tokens (`degenerate`)
    /// 2. two or more segments: TF-IDF (`tfidf`)
    /// 3. fewer segments: token frequency (`frequency`)
    /// 4. any other TF-IDF failure: tokens of 4+ letters by frequency (`fallback`)
    pub fn extract(&self, text: &str, existing: &[String]) -> KeywordExtraction {
        let lower = text.to_lowercase();
        let content = self.content_tokens(&lower, 3);
        let existing = normalized_existing(existing);

        if content.len() < MIN_CONTENT_TOKENS {
            let keywords = unique_in_order(content.iter().copied())
                .into_iter()
                .map(|t| candidate(t, LOW_CONFIDENCE, KeywordSource::Frequency))
                .collect();
            return self.finish(keywords, ExtractionMethod::Degenerate, SMALL_CAP, &existing);
        }

        match self.weighted(text) {
            Ok(keywords) => {
                self.finish(keywords, ExtractionMethod::Tfidf, self.max_keywords, &existing)
            }
            Err(ExtractionError::InsufficientSegments { found, .. }) => {
                tracing::debug!(segments = found, "too few segments for tf-idf; using frequency");
                let keywords = most_common(content.iter().copied())
                    .into_iter()
                    .map(|(t, _)| candidate(t, LOW_CONFIDENCE, KeywordSource::Frequency))
                    .collect();
                self.finish(keywords, ExtractionMethod::Frequency, self.max_keywords, &existing)
            }
            Err(e) => {
                events::degradation_triggered("keyword_extractor", &e.to_string(), "fallback");
                let keywords = most_common(self.content_tokens(&lower, 4))
                    .into_iter()
                    .map(|(t, _)| candidate(t, FALLBACK_CONFIDENCE, KeywordSource::Frequency))
                    .collect();
                self.finish(keywords, ExtractionMethod::Fallback, SMALL_CAP, &existing)
            }
        }
    }

    /// TF-IDF candidates, stopword-bearing terms removed.
    pub fn weighted(&self, text: &str) -> Result<Vec<KeywordCandidate>, ExtractionError> {
        let segments = split_segments(text);
        let model = TfidfModel::fit(&segments, MAX_FEATURES)?;
        Ok(model
            .ranked(TOP_CANDIDATES)
            .into_iter()
            .filter(|(term, _)| !term.split(' ').any(|w| self.lexicon.is_stopword(w)))
            .map(|(term, score)| candidate(term, score, KeywordSource::Tfidf))
            .collect())
    }

    fn content_tokens<'a>(&self, lower: &'a str, min_chars: usize) -> Vec<&'a str> {
        tokenize(lower, min_chars)
            .into_iter()
            .map(|t| t.text)
            .filter(|t| !self.lexicon.is_stopword(t))
            .collect()
    }

    fn finish(
        &self,
        keywords: Vec<KeywordCandidate>,
        method: ExtractionMethod,
        cap: usize,
        existing: &HashSet<String>,
    ) -> KeywordExtraction {
        let cap = cap.min(self.max_keywords);
        let keywords: Vec<KeywordCandidate> = keywords
            .into_iter()
            .filter(|k| !existing.contains(&k.text.trim().to_lowercase()))
            .take(cap)
            .collect();
        tracing::debug!(method = method.as_str(), count = keywords.len(), "keywords extracted");
        KeywordExtraction { keywords, method }
    }
}

fn candidate(text: String, score: f64, source: KeywordSource) -> KeywordCandidate {
    KeywordCandidate { text, score, source }
}

fn normalized_existing(existing: &[String]) -> HashSet<String> {
    existing
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}
