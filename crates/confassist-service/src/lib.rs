//! # confassist-service
//!
//! Request-level orchestration. [`AuthorService`] and [`ReviewerService`]
//! check feature flags and input limits, run the algorithms, and write one
//! audit record per call. [`AssistRuntime`] wires both from an
//! [`AssistConfig`](confassist_core::AssistConfig).

pub mod author;
pub mod guard;
pub mod reviewer;
pub mod runtime;

pub use author::AuthorService;
pub use reviewer::ReviewerService;
pub use runtime::AssistRuntime;

/// Improvement note when the polished text differs in length.
pub const IMPROVEMENT_STRUCTURE: &str = "Cấu trúc câu được cải thiện";
/// Improvement note when the polished text differs at all.
pub const IMPROVEMENT_STYLE: &str = "Văn phong academic được nâng cao";
