//! Neutral abstract summaries for reviewers.
//!
//! Key points are picked by cue words; the summary restates them and is
//! then padded or trimmed to the configured word range.

use std::sync::LazyLock;

use regex::Regex;

use confassist_core::constants::{DEFAULT_SUMMARY_MAX_WORDS, DEFAULT_SUMMARY_MIN_WORDS};
use confassist_core::models::{KeyPoints, PaperSummary};

static RE_SENTENCE_END: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[.!?]+").ok());

const PROBLEM_CUES: &[&str] = &["problem", "challenge", "issue", "difficulty", "limitation"];
const METHOD_CUES: &[&str] = &[
    "method", "approach", "technique", "algorithm", "framework", "model", "system", "propose",
    "develop", "introduce", "present",
];
const DATA_CUES: &[&str] = &["dataset", "data", "corpus", "benchmark", "experiment"];
const CONTRIBUTION_CUES: &[&str] = &[
    "contribution", "result", "achieve", "improve", "outperform", "demonstrate", "show",
    "effective", "performance",
];

/// The problem usually sits in the opening sentences, contributions at the end.
const EDGE_SENTENCES: usize = 3;
/// Below this many words the summary borrows more abstract sentences.
const BORROW_BELOW_WORDS: usize = 100;

const NO_PROBLEM_OPENING: &str = "This paper presents research in the given domain.";

/// Raw sentence pieces, untrimmed and possibly empty.
fn raw_sentences(text: &str) -> Vec<&str> {
    match RE_SENTENCE_END.as_ref() {
        Some(re) => re.split(text).collect(),
        None => vec![text],
    }
}

fn sentences(text: &str) -> Vec<&str> {
    raw_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn has_cue(sentence: &str, cues: &[&str]) -> bool {
    let lower = sentence.to_lowercase();
    cues.iter().any(|cue| lower.contains(cue))
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Builds summaries within a word range.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer {
    min_words: usize,
    max_words: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_MIN_WORDS, DEFAULT_SUMMARY_MAX_WORDS)
    }
}

impl Summarizer {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words: max_words.max(min_words),
        }
    }

    /// Summarize `abstract_text`. `keywords` help locate the methodology
    /// sentence when no method cue word is present.
    pub fn summarize(&self, abstract_text: &str, keywords: &[String]) -> PaperSummary {
        let key_points = extract_key_points(abstract_text, keywords);
        let mut summary = self.compose(abstract_text, &key_points);

        let words = word_count(&summary);
        if words < self.min_words {
            summary = self.expand(summary, abstract_text);
        } else if words > self.max_words {
            summary = truncate_words(&summary, self.max_words);
        }

        let word_count = word_count(&summary);
        tracing::debug!(word_count, "summary generated");
        PaperSummary {
            summary,
            key_points,
            word_count,
        }
    }

    fn compose(&self, abstract_text: &str, key_points: &KeyPoints) -> String {
        let mut parts: Vec<String> = Vec::new();
        if key_points.research_problem.is_empty() {
            parts.push(NO_PROBLEM_OPENING.to_string());
        } else {
            parts.push(format!(
                "This paper addresses {}",
                key_points.research_problem.to_lowercase()
            ));
        }
        for point in [
            &key_points.methodology,
            &key_points.dataset,
            &key_points.contributions,
        ] {
            if !point.is_empty() && !parts.iter().any(|p| p == point) {
                parts.push(point.clone());
            }
        }

        let mut summary = parts.join(" ");
        if word_count(&summary) < BORROW_BELOW_WORDS {
            for sentence in raw_sentences(abstract_text).into_iter().map(str::trim) {
                if !summary.contains(sentence) {
                    summary.push(' ');
                    summary.push_str(sentence);
                    if word_count(&summary) >= self.min_words {
                        break;
                    }
                }
            }
        }
        summary.trim().to_string()
    }

    fn expand(&self, mut summary: String, abstract_text: &str) -> String {
        for sentence in raw_sentences(abstract_text).into_iter().map(str::trim) {
            if !summary.contains(sentence) {
                summary.push(' ');
                summary.push_str(sentence);
                summary.push('.');
                if word_count(&summary) >= self.min_words {
                    break;
                }
            }
        }
        summary
    }
}

/// Pick the key sentences of an abstract by cue words.
pub fn extract_key_points(abstract_text: &str, keywords: &[String]) -> KeyPoints {
    let sentences = sentences(abstract_text);
    let mut points = KeyPoints::default();

    points.research_problem = sentences
        .iter()
        .take(EDGE_SENTENCES)
        .find(|s| has_cue(s, PROBLEM_CUES))
        .or_else(|| sentences.first())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let keyword_cues: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    let keyword_cues: Vec<&str> = keyword_cues.iter().map(String::as_str).collect();
    points.methodology = sentences
        .iter()
        .find(|s| has_cue(s, METHOD_CUES))
        .or_else(|| sentences.iter().find(|s| has_cue(s, &keyword_cues)))
        .map(|s| s.to_string())
        .unwrap_or_default();

    points.dataset = sentences
        .iter()
        .find(|s| has_cue(s, DATA_CUES))
        .map(|s| s.to_string())
        .unwrap_or_default();

    let tail = sentences.len().saturating_sub(EDGE_SENTENCES);
    points.contributions = sentences[tail..]
        .iter()
        .find(|s| has_cue(s, CONTRIBUTION_CUES))
        .map(|s| s.to_string())
        .unwrap_or_default();

    points
}

/// Keep at most `max_words` words, ending at the last full stop when there
/// is one, otherwise marking the cut with "...".
pub fn truncate_words(summary: &str, max_words: usize) -> String {
    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() <= max_words {
        return summary.to_string();
    }
    let truncated = words[..max_words].join(" ");
    match truncated.rfind('.') {
        Some(pos) if pos > 0 => truncated[..=pos].to_string(),
        _ => format!("{truncated}..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABSTRACT: &str = "Peer review assignment is a hard problem for large conferences. \
        We propose a matching framework based on topic models. \
        Experiments on a benchmark of 5000 papers were run. \
        Results show the approach improves assignment quality.";

    #[test]
    fn key_points_follow_cue_words() {
        let points = extract_key_points(ABSTRACT, &[]);
        assert_eq!(points.research_problem, "Peer review assignment is a hard problem for large conferences");
        assert_eq!(points.methodology, "We propose a matching framework based on topic models");
        assert_eq!(points.dataset, "Experiments on a benchmark of 5000 papers were run");
        assert_eq!(points.contributions, "Results show the approach improves assignment quality");
    }

    #[test]
    fn problem_defaults_to_first_sentence() {
        let points = extract_key_points("A study of bees. Bees fly.", &[]);
        assert_eq!(points.research_problem, "A study of bees");
        assert_eq!(points.methodology, "");
    }

    #[test]
    fn keywords_locate_methodology_without_cues() {
        let keywords = vec!["Transformers".to_string()];
        let points = extract_key_points("A study of bees. Transformers read bee dances.", &keywords);
        assert_eq!(points.methodology, "Transformers read bee dances");
    }

    #[test]
    fn empty_abstract() {
        let summary = Summarizer::default().summarize("", &[]);
        assert_eq!(summary.key_points, KeyPoints::default());
        assert_eq!(summary.summary, NO_PROBLEM_OPENING);
    }

    #[test]
    fn summary_opens_with_problem() {
        let summary = Summarizer::default().summarize(ABSTRACT, &[]);
        assert!(summary
            .summary
            .starts_with("This paper addresses peer review assignment is a hard problem"));
        assert_eq!(summary.word_count, word_count(&summary.summary));
    }

    #[test]
    fn long_summaries_are_truncated() {
        let sentence = "This sentence has exactly seven words here. ";
        let long = sentence.repeat(60);
        let summary = Summarizer::new(10, 12).summarize(&long, &[]);
        assert_eq!(summary.word_count, 12);
        assert!(summary.summary.ends_with("..."));
    }

    #[test]
    fn truncation_without_full_stop_gets_ellipsis() {
        assert_eq!(truncate_words("one two three four", 2), "one two...");
        assert_eq!(truncate_words("one. two three four", 3), "one.");
        assert_eq!(truncate_words("one two", 5), "one two");
    }
}
