use serde::{Deserialize, Serialize};

/// Source of a correction, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionKind {
    /// Multi-word academic phrase missing its diacritics.
    Phrase,
    /// Single dictionary word missing its diacritics.
    Spelling,
    /// Suggested by the external assistant.
    Contextual,
}

/// A single suggested edit. `position` is the byte offset of `original`
/// in the checked text; `original` and `suggested` always differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub original: String,
    pub suggested: String,
    pub position: usize,
    pub error_type: CorrectionKind,
    pub explanation: String,
}

impl CorrectionEntry {
    /// Byte offset one past the end of `original`.
    pub fn end(&self) -> usize {
        self.position + self.original.len()
    }

    /// True when the byte spans of the two entries intersect.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.position < end && start < self.end()
    }
}
