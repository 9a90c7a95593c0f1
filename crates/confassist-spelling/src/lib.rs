//! # confassist-spelling
//!
//! Restores missing Vietnamese diacritics in author text. Corrections come
//! from three layers in priority order: academic phrases, dictionary words,
//! and an optional contextual assistant. Nothing is applied automatically;
//! [`apply_corrections`] produces the suggested text for review.

pub mod apply;
pub mod contextual;
pub mod corrector;

pub use apply::apply_corrections;
pub use corrector::{SpellCheckReport, SpellingCorrector};

/// Explanation attached to phrase corrections.
pub const PHRASE_EXPLANATION: &str = "Cụm từ học thuật thiếu dấu";
/// Explanation attached to dictionary word corrections.
pub const SPELLING_EXPLANATION: &str = "Thiếu dấu tiếng Việt";
/// Prefix of contextual explanations; followed by up to 50 chars of context.
pub const CONTEXTUAL_EXPLANATION_PREFIX: &str = "Lỗi ngữ cảnh: ";
