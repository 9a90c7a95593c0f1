use confassist_lexicon::{fold, is_stripped, normalize, FoldedText};
use proptest::prelude::*;

// ── normalize never touches text without Vietnamese letters ────────────────

proptest! {
    #[test]
    fn normalize_is_identity_on_ascii(text in "[ -~]{0,64}") {
        prop_assert_eq!(normalize(&text), text.clone());
        prop_assert!(is_stripped(&text));
    }

    #[test]
    fn normalize_is_total_and_idempotent(text in "\\PC{0,48}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(is_stripped(&once));
    }
}

// ── folded shadow maps back onto whole original characters ─────────────────

proptest! {
    #[test]
    fn folded_ranges_land_on_char_boundaries(
        text in "[a-zA-Zàáạăắâấèéêếìíòóôốơớùúưứýđ ]{1,40}"
    ) {
        let shadow = FoldedText::new(&text);
        prop_assert_eq!(shadow.as_str(), fold(&text));
        let len = shadow.as_str().len();
        for start in 0..len {
            if let Some(range) = shadow.original_range(start, len) {
                prop_assert!(text.is_char_boundary(range.start));
                prop_assert!(text.is_char_boundary(range.end));
                prop_assert_eq!(fold(&text[range]), shadow.as_str()[start..].to_string());
            }
        }
    }
}
