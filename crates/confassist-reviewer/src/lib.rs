//! # confassist-reviewer
//!
//! Deterministic reviewer aids. [`similarity`] scores how well a reviewer's
//! expertise matches a paper; [`summary`] builds a neutral summary from an
//! abstract. Neither sees author identity.

pub mod similarity;
pub mod summary;

pub use similarity::{explain, score};
pub use summary::Summarizer;
