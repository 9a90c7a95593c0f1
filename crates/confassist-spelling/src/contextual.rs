//! Positioning of assistant suggestions.
//!
//! The assistant returns `{original, correct, context}` without offsets.
//! Each suggestion is located by searching from a cursor kept per distinct
//! `original`, so repeated occurrences land on successive matches instead
//! of all pointing at the first one. A hit inside a longer word is skipped.

use std::collections::HashMap;

use confassist_core::traits::ContextualSuggestion;
use confassist_core::{CorrectionEntry, CorrectionKind};

use crate::CONTEXTUAL_EXPLANATION_PREFIX;

const CONTEXT_PREVIEW_CHARS: usize = 50;

/// Turn suggestions into positioned corrections. Suggestions that are
/// no-ops, cannot be found, or overlap `accepted` are dropped.
pub fn position_suggestions(
    text: &str,
    suggestions: Vec<ContextualSuggestion>,
    accepted: &[CorrectionEntry],
) -> Vec<CorrectionEntry> {
    let mut cursors: HashMap<String, usize> = HashMap::new();
    let mut positioned: Vec<CorrectionEntry> = Vec::new();

    for suggestion in suggestions {
        if suggestion.original.is_empty()
            || suggestion.correct.is_empty()
            || suggestion.original == suggestion.correct
        {
            continue;
        }

        let cursor = cursors.entry(suggestion.original.clone()).or_insert(0);
        let Some(position) = find_word(text, &suggestion.original, *cursor) else {
            tracing::debug!(original = %suggestion.original, "suggestion not found in text");
            continue;
        };
        let end = position + suggestion.original.len();
        *cursor = end;

        if accepted
            .iter()
            .chain(positioned.iter())
            .any(|c| c.overlaps(position, end))
        {
            continue;
        }

        let context: String = suggestion.context.chars().take(CONTEXT_PREVIEW_CHARS).collect();
        positioned.push(CorrectionEntry {
            original: suggestion.original,
            suggested: suggestion.correct,
            position,
            error_type: CorrectionKind::Contextual,
            explanation: format!("{CONTEXTUAL_EXPLANATION_PREFIX}{context}"),
        });
    }

    positioned
}

/// First occurrence of `needle` at or after byte `from` that does not start
/// or end inside a word.
fn find_word(text: &str, needle: &str, from: usize) -> Option<usize> {
    let mut from = from;
    loop {
        let position = from + text.get(from..)?.find(needle)?;
        let end = position + needle.len();
        if on_word_boundary(text, position, end) {
            return Some(position);
        }
        // Resume one char past the rejected hit.
        from = position + text[position..].chars().next()?.len_utf8();
    }
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let needle = &text[start..end];
    let joins = |a: Option<char>, b: Option<char>| match (a, b) {
        (Some(a), Some(b)) => a.is_alphanumeric() && b.is_alphanumeric(),
        _ => false,
    };
    let left = joins(text[..start].chars().next_back(), needle.chars().next());
    let right = joins(needle.chars().next_back(), text[end..].chars().next());
    !left && !right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(original: &str, correct: &str) -> ContextualSuggestion {
        ContextualSuggestion {
            original: original.to_string(),
            correct: correct.to_string(),
            context: "phương pháp".to_string(),
        }
    }

    #[test]
    fn repeated_originals_take_successive_positions() {
        let text = "moi nguoi, phương pháp moi";
        let out = position_suggestions(
            text,
            vec![suggestion("moi", "mọi"), suggestion("moi", "mới")],
            &[],
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, 0);
        assert_eq!(out[1].position, text.rfind("moi").unwrap());
        assert_eq!(out[1].suggested, "mới");
    }

    #[test]
    fn drops_noops_and_missing() {
        let out = position_suggestions(
            "abc",
            vec![suggestion("abc", "abc"), suggestion("zzz", "yyy"), suggestion("", "x")],
            &[],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn explanation_truncates_context() {
        let mut s = suggestion("moi", "mới");
        s.context = "x".repeat(80);
        let out = position_suggestions("moi", vec![s], &[]);
        assert_eq!(
            out[0].explanation,
            format!("{CONTEXTUAL_EXPLANATION_PREFIX}{}", "x".repeat(50))
        );
    }

    #[test]
    fn hits_inside_longer_words_are_skipped() {
        let text = "phan tich an toan";
        let out = position_suggestions(text, vec![suggestion("an", "ấn")], &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].position, 10);
        assert_eq!(crate::apply_corrections(text, &out), "phan tich ấn toan");
    }

    #[test]
    fn embedded_only_occurrence_is_dropped() {
        let out = position_suggestions("phan tich", vec![suggestion("an", "ấn")], &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn boundary_next_to_punctuation_and_accents() {
        assert_eq!(find_word("(moi), mới moi", "moi", 0), Some(1));
        assert_eq!(find_word("mớimoi moi", "moi", 0), Some(9));
        assert_eq!(find_word("moi", "moi", 1), None);
    }
}
