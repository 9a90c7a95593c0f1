use confassist_core::models::MatchTier;
use confassist_reviewer::{score, Summarizer};
use proptest::prelude::*;

// ── similarity stays in range and agrees with its tier ─────────────────────

proptest! {
    #[test]
    fn similarity_in_unit_range(
        reviewer in prop::collection::vec("[a-z ]{0,12}", 0..6),
        paper in prop::collection::vec("[a-z ]{0,12}", 0..6),
        text in "[a-z ]{0,80}",
    ) {
        let result = score(&reviewer, &paper, &text);
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert_eq!(result.tier, MatchTier::from_score(result.score));
        let mut sorted = result.matching_topics.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted, result.matching_topics);
    }

    #[test]
    fn identical_topic_lists_match_fully(
        topics in prop::collection::btree_set("[a-z]{5}", 1..6),
    ) {
        let topics: Vec<String> = topics.into_iter().collect();
        let result = score(&topics, &topics, "");
        prop_assert_eq!(result.keyword_score, 1.0);
    }

    #[test]
    fn topic_order_does_not_change_score(
        reviewer in prop::collection::vec("[a-z]{3,8}", 1..5),
        paper in prop::collection::vec("[a-z]{3,8}", 1..5),
    ) {
        let forward = score(&reviewer, &paper, "");
        let mut reversed = paper.clone();
        reversed.reverse();
        let backward = score(&reviewer, &reversed, "");
        prop_assert_eq!(forward.score, backward.score);
        prop_assert_eq!(forward.matching_topics, backward.matching_topics);
    }
}

// ── summaries respect the upper word bound ─────────────────────────────────

proptest! {
    #[test]
    fn summary_never_exceeds_max_words(
        sentences in prop::collection::vec("[a-z]{2,8}( [a-z]{2,8}){3,15}", 1..40),
    ) {
        let text = sentences.join(". ");
        let summary = Summarizer::default().summarize(&text, &[]);
        prop_assert!(summary.word_count <= 250);
        prop_assert_eq!(summary.word_count, summary.summary.split_whitespace().count());
    }
}
