//! Author-facing features: spellcheck, abstract polishing, keyword
//! suggestion.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;

use confassist_audit::{AuditLogger, OperationLog};
use confassist_core::errors::{LlmError, ServiceResult};
use confassist_core::models::api::{
    KeywordSuggestionRequest, KeywordSuggestionResponse, PolishRequest, PolishResponse,
    SpellCheckRequest, SpellCheckResponse,
};
use confassist_core::models::{AiFeature, UserRole};
use confassist_core::traits::IAbstractPolisher;
use confassist_core::tracing::events;
use confassist_core::AssistConfig;
use confassist_keywords::KeywordExtractor;
use confassist_lexicon::Lexicon;
use confassist_llm::Assistants;
use confassist_spelling::SpellingCorrector;

use crate::guard::{ensure_enabled, ensure_max_chars};
use crate::{IMPROVEMENT_STRUCTURE, IMPROVEMENT_STYLE};

/// Suggestions for paper authors. Nothing is ever applied: every response
/// carries `applied = false`.
pub struct AuthorService {
    config: Arc<AssistConfig>,
    corrector: SpellingCorrector,
    extractor: KeywordExtractor,
    polisher: Arc<dyn IAbstractPolisher>,
    audit: AuditLogger,
}

impl AuthorService {
    pub fn new(
        config: Arc<AssistConfig>,
        lexicon: Arc<Lexicon>,
        assistants: &Assistants,
        audit: AuditLogger,
    ) -> Self {
        let corrector =
            SpellingCorrector::new(lexicon.clone()).with_contextual(assistants.corrector.clone());
        let extractor = KeywordExtractor::new(lexicon)
            .with_max_keywords(config.limits.effective_max_keywords());
        Self {
            config,
            corrector,
            extractor,
            polisher: assistants.polisher.clone(),
            audit,
        }
    }

    /// Diacritic and contextual corrections for a title, abstract, or
    /// keyword field.
    pub fn spellcheck(&self, request: &SpellCheckRequest) -> ServiceResult<SpellCheckResponse> {
        let feature = AiFeature::AuthorSpellcheck;
        ensure_enabled(&self.config, &self.audit, feature, &request.user_id)?;
        ensure_max_chars(
            "text",
            &request.text,
            self.config.limits.effective_max_text_length(),
        )?;

        let started = Instant::now();
        let report = self.corrector.check(&request.text);

        self.audit.log_operation(OperationLog {
            user_id: &request.user_id,
            user_role: UserRole::Author,
            feature,
            input: &request.text,
            output: json!({
                "corrections_count": report.corrections.len(),
                "dict_corrections": report.dictionary_corrections,
                "ai_corrections": report.contextual_corrections,
            }),
            applied: false,
            metadata: Some(json!({ "field_type": request.field_type })),
        });
        events::operation_completed(feature, report.corrections.len(), elapsed_ms(started));

        Ok(SpellCheckResponse {
            original_text: request.text.clone(),
            suggested_text: report.suggested_text,
            corrections: report.corrections,
            applied: false,
        })
    }

    /// Academic rewrite of an abstract, shown side by side with the
    /// original. Falls back to the original text when the assistant is
    /// unavailable or fails.
    pub fn polish(&self, request: &PolishRequest) -> ServiceResult<PolishResponse> {
        let feature = AiFeature::AuthorPolish;
        ensure_enabled(&self.config, &self.audit, feature, &request.user_id)?;
        ensure_max_chars(
            "abstract",
            &request.abstract_text,
            self.config.limits.effective_max_abstract_length(),
        )?;

        let started = Instant::now();
        let original = &request.abstract_text;

        let (polished, improvements, output) = match self.polisher.polish(original) {
            Ok(polished) => {
                let improvements = improvements(original, &polished);
                let output = json!({
                    "polished": true,
                    "method": "llm",
                    "model": self.polisher.name(),
                    "improvements_count": improvements.len(),
                });
                (polished, improvements, output)
            }
            Err(e) => {
                events::degradation_triggered(self.polisher.name(), &e.to_string(), "original_text");
                (original.clone(), Vec::new(), fallback_output(&e))
            }
        };

        self.audit.log_operation(OperationLog {
            user_id: &request.user_id,
            user_role: UserRole::Author,
            feature,
            input: original,
            output,
            applied: false,
            metadata: None,
        });
        events::operation_completed(feature, improvements.len(), elapsed_ms(started));

        Ok(PolishResponse {
            original_abstract: original.clone(),
            polished_abstract: polished,
            improvements,
            applied: false,
        })
    }

    /// Ranked keyword suggestions, excluding keywords the author already
    /// has.
    pub fn suggest_keywords(
        &self,
        request: &KeywordSuggestionRequest,
    ) -> ServiceResult<KeywordSuggestionResponse> {
        let feature = AiFeature::AuthorKeywords;
        ensure_enabled(&self.config, &self.audit, feature, &request.user_id)?;
        ensure_max_chars(
            "abstract",
            &request.abstract_text,
            self.config.limits.effective_max_abstract_length(),
        )?;

        let started = Instant::now();
        let extraction = self
            .extractor
            .extract(&request.abstract_text, &request.existing_keywords);

        self.audit.log_operation(OperationLog {
            user_id: &request.user_id,
            user_role: UserRole::Author,
            feature,
            input: &request.abstract_text,
            output: json!({
                "keywords_count": extraction.keywords.len(),
                "method": extraction.method.as_str(),
            }),
            applied: false,
            metadata: None,
        });
        events::operation_completed(feature, extraction.keywords.len(), elapsed_ms(started));

        let confidence_scores = extraction
            .keywords
            .iter()
            .map(|k| (k.text.clone(), k.score))
            .collect();
        Ok(KeywordSuggestionResponse {
            suggested_keywords: extraction.texts(),
            confidence_scores,
            applied: false,
        })
    }
}

impl std::fmt::Debug for AuthorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorService")
            .field("corrector", &self.corrector)
            .field("extractor", &self.extractor)
            .field("polisher", &self.polisher.name())
            .finish_non_exhaustive()
    }
}

/// Change notes for a polished abstract.
pub fn improvements(original: &str, polished: &str) -> Vec<String> {
    let mut notes = Vec::new();
    if polished.chars().count() != original.chars().count() {
        notes.push(IMPROVEMENT_STRUCTURE.to_string());
    }
    if polished != original {
        notes.push(IMPROVEMENT_STYLE.to_string());
    }
    notes
}

fn fallback_output(error: &LlmError) -> serde_json::Value {
    match error {
        LlmError::NotConfigured { reason } => json!({
            "polished": false,
            "method": error.fallback_method(),
            "reason": reason,
        }),
        other => json!({
            "polished": false,
            "method": other.fallback_method(),
            "error": other.to_string(),
        }),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_has_no_improvements() {
        assert!(improvements("abc", "abc").is_empty());
    }

    #[test]
    fn same_length_change_is_style_only() {
        assert_eq!(improvements("abc", "abd"), vec![IMPROVEMENT_STYLE.to_string()]);
    }

    #[test]
    fn length_change_reports_both() {
        assert_eq!(improvements("abc", "abcd").len(), 2);
    }

    #[test]
    fn fallback_output_shapes() {
        let declined = fallback_output(&LlmError::NotConfigured {
            reason: "API key not configured".to_string(),
        });
        assert_eq!(declined["method"], "fallback");
        assert_eq!(declined["reason"], "API key not configured");

        let failed = fallback_output(&LlmError::Timeout { timeout_secs: 20 });
        assert_eq!(failed["method"], "error");
        assert!(failed["error"].as_str().unwrap().contains("20s"));
    }
}
