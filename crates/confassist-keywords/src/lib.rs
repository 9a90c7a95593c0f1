//! # confassist-keywords
//!
//! Keyword suggestion for abstracts. The extractor runs a chain of
//! strategies: segment-level TF-IDF when the text has enough sentences,
//! plain token frequency when it does not, and a simplified frequency pass
//! when vectorization fails. Callers always get a result.

pub mod extractor;
pub mod frequency;
pub mod segment;
pub mod tfidf;

pub use extractor::KeywordExtractor;
pub use tfidf::TfidfModel;

/// Score given to keywords ranked by frequency rather than weight.
pub const LOW_CONFIDENCE: f64 = 0.7;
/// Score given to keywords from the simplified fallback pass.
pub const FALLBACK_CONFIDENCE: f64 = 0.6;
