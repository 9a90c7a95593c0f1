//! Segment-level TF-IDF over unigrams and bigrams.
//!
//! Each segment is a document. Weights use raw term counts, smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and L2 normalization per segment. The
//! vocabulary is limited to the most frequent terms across the corpus.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use confassist_core::errors::ExtractionError;
use confassist_lexicon::tokenize;

/// Fewest segments that make document frequency meaningful.
pub const MIN_SEGMENTS: usize = 2;
/// Vocabulary size cap.
pub const MAX_FEATURES: usize = 20;

const MIN_TOKEN_CHARS: usize = 3;

/// A fitted model: vocabulary, idf, and one normalized row per segment.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    terms: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl TfidfModel {
    /// Fit on `segments`, keeping at most `max_features` terms.
    pub fn fit(segments: &[&str], max_features: usize) -> Result<Self, ExtractionError> {
        if segments.len() < MIN_SEGMENTS {
            return Err(ExtractionError::InsufficientSegments {
                required: MIN_SEGMENTS,
                found: segments.len(),
            });
        }

        let documents: Vec<Vec<String>> = segments.iter().map(|s| segment_terms(s)).collect();

        // Corpus-wide counts and document frequencies.
        let mut totals: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &documents {
            let mut seen = HashSet::new();
            for term in doc {
                *totals.entry(term.as_str()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                }
            }
        }
        if totals.is_empty() {
            return Err(ExtractionError::EmptyVocabulary);
        }

        let mut by_count: Vec<(&str, usize)> = totals.into_iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        by_count.truncate(max_features.max(1));
        let mut terms: Vec<String> = by_count.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort();

        let n = documents.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t.as_str()).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let index: HashMap<&str, usize> =
            terms.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect();

        let mut rows = Vec::with_capacity(documents.len());
        for doc in &documents {
            let mut row = vec![0.0; terms.len()];
            for term in doc {
                if let Some(&i) = index.get(term.as_str()) {
                    row[i] += 1.0;
                }
            }
            for (w, idf) in row.iter_mut().zip(&idf) {
                *w *= idf;
            }
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|w| *w /= norm);
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(ExtractionError::Vectorization {
                    reason: "non-finite weight".to_string(),
                });
            }
            rows.push(row);
        }

        Ok(Self { terms, idf, rows })
    }

    /// Vocabulary in alphabetical order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        let i = self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()?;
        Some(self.idf[i])
    }

    pub fn segment_count(&self) -> usize {
        self.rows.len()
    }

    /// Mean weight of every term across segments.
    pub fn average_weights(&self) -> BTreeMap<String, f64> {
        let n = self.rows.len().max(1) as f64;
        self.terms
            .iter()
            .enumerate()
            .map(|(i, term)| {
                let sum: f64 = self.rows.iter().map(|row| row[i]).sum();
                (term.clone(), sum / n)
            })
            .collect()
    }

    /// The `top` terms by mean weight; ties alphabetical.
    pub fn ranked(&self, top: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self.average_weights().into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(top);
        ranked
    }
}

/// Lowercased unigrams and adjacent-token bigrams of one segment.
fn segment_terms(segment: &str) -> Vec<String> {
    let lower = segment.to_lowercase();
    let tokens: Vec<&str> = tokenize(&lower, MIN_TOKEN_CHARS)
        .into_iter()
        .map(|t| t.text)
        .collect();
    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_is_insufficient() {
        let err = TfidfModel::fit(&["only one segment here"], MAX_FEATURES).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::InsufficientSegments {
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn segments_without_words_have_empty_vocabulary() {
        let err = TfidfModel::fit(&["12 34 56 78 90", "!! ?? -- ## 11"], MAX_FEATURES).unwrap_err();
        assert_eq!(err, ExtractionError::EmptyVocabulary);
    }

    #[test]
    fn rows_are_unit_length() {
        let model = TfidfModel::fit(
            &["graph neural networks", "neural networks for text"],
            MAX_FEATURES,
        )
        .unwrap();
        for row in &model.rows {
            let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn smoothed_idf() {
        let model = TfidfModel::fit(
            &["graph neural networks", "neural networks for text"],
            MAX_FEATURES,
        )
        .unwrap();
        // "neural" is in both segments, "graph" in one.
        assert!((model.idf("neural").unwrap() - 1.0).abs() < 1e-12);
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((model.idf("graph").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn vocabulary_keeps_most_frequent_terms() {
        let model = TfidfModel::fit(&["alpha alpha beta", "alpha gamma delta"], 2).unwrap();
        assert_eq!(model.terms(), &["alpha".to_string(), "alpha alpha".to_string()]);
    }

    #[test]
    fn bigrams_are_included() {
        let model = TfidfModel::fit(&["deep learning", "deep learning models"], MAX_FEATURES).unwrap();
        assert!(model.terms().iter().any(|t| t == "deep learning"));
    }
}
