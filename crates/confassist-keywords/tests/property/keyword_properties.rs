use std::sync::Arc;

use confassist_core::models::ExtractionMethod;
use confassist_keywords::KeywordExtractor;
use confassist_lexicon::Lexicon;
use proptest::prelude::*;

fn extractor() -> KeywordExtractor {
    KeywordExtractor::new(Arc::new(Lexicon::academic_vietnamese()))
}

fn words(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{3,9}", min..max)
}

// ── too few content tokens never errors and stays small ────────────────────

proptest! {
    #[test]
    fn few_tokens_yield_at_most_five(tokens in words(0, 5)) {
        let text = tokens.join(" ");
        let result = extractor().extract(&text, &[]);
        prop_assert!(result.keywords.len() <= 5);
        prop_assert_eq!(result.method, ExtractionMethod::Degenerate);
    }
}

// ── any input: bounded, non-negative, no duplicates, no existing ───────────

proptest! {
    #[test]
    fn results_are_bounded_and_clean(
        sentences in prop::collection::vec(words(3, 10), 1..5),
        existing in words(0, 3),
    ) {
        let text = sentences
            .iter()
            .map(|s| s.join(" "))
            .collect::<Vec<_>>()
            .join(". ");
        let result = extractor().extract(&text, &existing);
        prop_assert!(result.keywords.len() <= 10);
        let mut seen = std::collections::HashSet::new();
        for keyword in &result.keywords {
            prop_assert!(keyword.score >= 0.0);
            prop_assert!(seen.insert(keyword.text.clone()), "duplicate {}", keyword.text);
            prop_assert!(!existing.contains(&keyword.text));
        }
    }
}
