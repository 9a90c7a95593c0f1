use std::sync::Arc;

use confassist_lexicon::{is_stripped, tokenize, Lexicon};
use confassist_spelling::{apply_corrections, SpellingCorrector};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "bai", "bao", "nghien", "cuu", "ket", "qua", "phuong", "phap", "du", "lieu",
    "phan", "tich", "moi", "data", "model", "Bai", "Nghien", "bài", "báo",
    "hội", "đồng", "thong", "tin", "giao", "duc", "xyz", "Toi",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(VOCAB), prop::sample::select(&[" ", "  ", ", ", ". "][..])),
        0..12,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, sep)| format!("{w}{sep}"))
            .collect::<String>()
    })
}

fn corrector() -> SpellingCorrector {
    SpellingCorrector::new(Arc::new(Lexicon::academic_vietnamese()))
}

// ── every correction points at its original and changes something ─────────

proptest! {
    #[test]
    fn corrections_are_anchored_and_non_trivial(text in sentence()) {
        for c in corrector().correct(&text) {
            prop_assert_ne!(&c.original, &c.suggested);
            prop_assert!(text[c.position..].starts_with(&c.original));
        }
    }

    #[test]
    fn corrections_never_overlap(text in sentence()) {
        let corrections = corrector().correct(&text);
        for pair in corrections.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].position);
        }
    }
}

// ── applying corrections reaches a fixed point ─────────────────────────────

proptest! {
    #[test]
    fn corrector_is_idempotent(text in sentence()) {
        let corrector = corrector();
        let once = corrector.check(&text).suggested_text;
        let again = corrector.correct(&once);
        prop_assert!(again.is_empty(), "second pass on {:?} produced {:?}", once, again);
    }

    #[test]
    fn no_correctable_token_survives(text in sentence()) {
        let lexicon = Lexicon::academic_vietnamese();
        let corrector = SpellingCorrector::new(Arc::new(lexicon.clone()));
        let fixed = corrector.check(&text).suggested_text;
        for token in tokenize(&fixed, 3) {
            if is_stripped(token.text) {
                let key = confassist_lexicon::fold(token.text);
                prop_assert!(
                    lexicon.dictionary().lookup(&key).is_none(),
                    "uncorrected token {:?} in {:?}",
                    token.text,
                    fixed
                );
            }
        }
    }
}
