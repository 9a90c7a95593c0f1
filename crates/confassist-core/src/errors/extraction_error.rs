//! Keyword extraction errors.

use super::error_code::{self, AssistErrorCode};

/// Typed failure modes of the weighted keyword strategy. They select the
/// next strategy in the chain and never reach the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("need at least {required} segments, found {found}")]
    InsufficientSegments { required: usize, found: usize },

    #[error("no terms left after tokenization")]
    EmptyVocabulary,

    #[error("vectorization failed: {reason}")]
    Vectorization { reason: String },
}

impl AssistErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        error_code::EXTRACTION_ERROR
    }
}
