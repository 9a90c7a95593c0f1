//! Shared data models: correction entries, keyword candidates, similarity
//! results, audit events, and the request/response contracts of the API.

pub mod api;
pub mod audit;
pub mod correction;
pub mod feature;
pub mod keyword;
pub mod similarity;
pub mod summary;

pub use api::*;
pub use audit::{AuditEvent, AuditRecord};
pub use correction::{CorrectionEntry, CorrectionKind};
pub use feature::{AiFeature, UserRole};
pub use keyword::{ExtractionMethod, KeywordCandidate, KeywordExtraction, KeywordSource};
pub use similarity::{MatchTier, SimilarityResult};
pub use summary::{KeyPoints, PaperSummary};
