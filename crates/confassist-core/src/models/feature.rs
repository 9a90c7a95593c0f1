use serde::{Deserialize, Serialize};

/// Which AI capability an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiFeature {
    AuthorSpellcheck,
    AuthorPolish,
    AuthorKeywords,
    ReviewerSummary,
    ReviewerSimilarity,
}

impl AiFeature {
    pub const ALL: [AiFeature; 5] = [
        Self::AuthorSpellcheck,
        Self::AuthorPolish,
        Self::AuthorKeywords,
        Self::ReviewerSummary,
        Self::ReviewerSimilarity,
    ];

    /// Wire value, also used in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorSpellcheck => "author_spellcheck",
            Self::AuthorPolish => "author_polish",
            Self::AuthorKeywords => "author_keywords",
            Self::ReviewerSummary => "reviewer_summary",
            Self::ReviewerSimilarity => "reviewer_similarity",
        }
    }

    /// Human readable name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AuthorSpellcheck => "Spell check",
            Self::AuthorPolish => "Polish",
            Self::AuthorKeywords => "Keywords",
            Self::ReviewerSummary => "Summary generation",
            Self::ReviewerSimilarity => "Similarity calculation",
        }
    }

    /// Role of the user that invokes this feature.
    pub fn role(&self) -> UserRole {
        match self {
            Self::AuthorSpellcheck | Self::AuthorPolish | Self::AuthorKeywords => {
                UserRole::Author
            }
            Self::ReviewerSummary | Self::ReviewerSimilarity => UserRole::Reviewer,
        }
    }
}

impl std::fmt::Display for AiFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User roles in the conference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Author,
    Reviewer,
    Chair,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Reviewer => "reviewer",
            Self::Chair => "chair",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
