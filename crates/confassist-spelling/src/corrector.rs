use std::sync::Arc;

use confassist_core::traits::IContextualCorrector;
use confassist_core::tracing::events;
use confassist_core::{CorrectionEntry, CorrectionKind};
use confassist_lexicon::{fold, is_stripped, match_leading_case, tokenize, FoldedText, Lexicon};

use crate::apply::apply_corrections;
use crate::contextual::position_suggestions;
use crate::{PHRASE_EXPLANATION, SPELLING_EXPLANATION};

/// Words shorter than this are never corrected.
const MIN_WORD_CHARS: usize = 3;

/// Result of one check, with the per-layer counts the audit log records.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellCheckReport {
    /// All corrections, ordered by position.
    pub corrections: Vec<CorrectionEntry>,
    /// The input with every correction applied.
    pub suggested_text: String,
    /// Phrase and word corrections.
    pub dictionary_corrections: usize,
    pub contextual_corrections: usize,
}

/// Diacritic restoration over a shared [`Lexicon`], optionally extended by
/// a contextual assistant.
///
/// Layers run in priority order: phrases reserve their spans, words skip
/// reserved spans, and assistant suggestions are dropped when they overlap
/// anything already accepted. Assistant failures never fail a check.
pub struct SpellingCorrector {
    lexicon: Arc<Lexicon>,
    contextual: Option<Arc<dyn IContextualCorrector>>,
}

impl SpellingCorrector {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            contextual: None,
        }
    }

    pub fn with_contextual(mut self, corrector: Arc<dyn IContextualCorrector>) -> Self {
        self.contextual = Some(corrector);
        self
    }

    /// Corrections for `text`, ordered by position.
    pub fn correct(&self, text: &str) -> Vec<CorrectionEntry> {
        self.check(text).corrections
    }

    /// Dictionary-only corrections (phrases and words).
    pub fn check_dictionary(&self, text: &str) -> Vec<CorrectionEntry> {
        let mut corrections = self.scan_phrases(text);
        let words = self.scan_words(text, &corrections);
        corrections.extend(words);
        corrections.sort_by_key(|c| c.position);
        corrections
    }

    /// Full check: all layers plus the suggested text.
    pub fn check(&self, text: &str) -> SpellCheckReport {
        if text.is_empty() {
            return SpellCheckReport {
                corrections: Vec::new(),
                suggested_text: String::new(),
                dictionary_corrections: 0,
                contextual_corrections: 0,
            };
        }

        let mut corrections = self.check_dictionary(text);
        let dictionary_corrections = corrections.len();

        let contextual = self.scan_contextual(text, &corrections);
        let contextual_corrections = contextual.len();
        corrections.extend(contextual);
        corrections.sort_by_key(|c| c.position);

        let suggested_text = apply_corrections(text, &corrections);
        tracing::debug!(
            dictionary = dictionary_corrections,
            contextual = contextual_corrections,
            "spell check finished"
        );

        SpellCheckReport {
            corrections,
            suggested_text,
            dictionary_corrections,
            contextual_corrections,
        }
    }

    fn scan_phrases(&self, text: &str) -> Vec<CorrectionEntry> {
        let phrases = self.lexicon.phrases();
        if phrases.is_empty() {
            return Vec::new();
        }

        let shadow = FoldedText::new(text);
        let mut found: Vec<CorrectionEntry> = Vec::new();

        for entry in phrases.iter() {
            for hit in entry.find_iter(shadow.as_str()) {
                let Some(range) = shadow.original_range(hit.start, hit.end) else {
                    continue;
                };
                let original = &text[range.clone()];
                if original.to_lowercase() == entry.canonical.to_lowercase() {
                    continue;
                }
                if found.iter().any(|c| c.overlaps(range.start, range.end)) {
                    continue;
                }
                let suggested = match_leading_case(original, &entry.canonical);
                if suggested == original {
                    continue;
                }
                found.push(CorrectionEntry {
                    original: original.to_string(),
                    suggested,
                    position: range.start,
                    error_type: CorrectionKind::Phrase,
                    explanation: PHRASE_EXPLANATION.to_string(),
                });
            }
        }

        found
    }

    fn scan_words(&self, text: &str, reserved: &[CorrectionEntry]) -> Vec<CorrectionEntry> {
        let dictionary = self.lexicon.dictionary();
        let mut found = Vec::new();

        for token in tokenize(text, MIN_WORD_CHARS) {
            if reserved.iter().any(|c| c.overlaps(token.start, token.end)) {
                continue;
            }
            // Accented words are the author's choice.
            if !is_stripped(token.text) {
                continue;
            }
            let Some(canonical) = dictionary.lookup(&fold(token.text)) else {
                continue;
            };
            let suggested = match_leading_case(token.text, canonical);
            if suggested != token.text {
                found.push(CorrectionEntry {
                    original: token.text.to_string(),
                    suggested,
                    position: token.start,
                    error_type: CorrectionKind::Spelling,
                    explanation: SPELLING_EXPLANATION.to_string(),
                });
            }
        }

        found
    }

    fn scan_contextual(&self, text: &str, accepted: &[CorrectionEntry]) -> Vec<CorrectionEntry> {
        let Some(assistant) = self.contextual.as_ref() else {
            return Vec::new();
        };
        if !assistant.is_available() {
            return Vec::new();
        }

        match assistant.suggest_corrections(text) {
            Ok(suggestions) => position_suggestions(text, suggestions, accepted),
            Err(e) => {
                events::degradation_triggered(assistant.name(), &e.to_string(), "dictionary_only");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for SpellingCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellingCorrector")
            .field("contextual", &self.contextual.as_ref().map(|c| c.name().to_string()))
            .finish_non_exhaustive()
    }
}
