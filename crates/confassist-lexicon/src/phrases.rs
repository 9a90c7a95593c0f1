use std::ops::Range;

use regex::Regex;

use crate::normalizer::fold;

/// One academic phrase. `key` is the folded form the pattern is built from.
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    pub key: String,
    pub canonical: String,
    pattern: Option<Regex>,
}

impl PhraseEntry {
    fn new(canonical: &str) -> Option<Self> {
        let canonical = canonical.split_whitespace().collect::<Vec<_>>().join(" ");
        if canonical.is_empty() {
            return None;
        }
        let key = fold(&canonical);
        let body = key
            .split(' ')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        let pattern = Regex::new(&format!(r"\b{body}\b")).ok();
        if pattern.is_none() {
            tracing::warn!(phrase = %canonical, "phrase pattern failed to compile");
        }
        Some(Self {
            key,
            canonical,
            pattern,
        })
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.key.split(' ').count()
    }

    /// Byte ranges of every match in an already folded haystack.
    pub fn find_iter<'a>(&'a self, folded: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.pattern
            .iter()
            .flat_map(move |re| re.find_iter(folded).map(|m| m.range()))
    }
}

/// Ordered phrase table. Longer phrases come first so that a phrase nested
/// in a longer one never shadows it; equal lengths keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct PhraseIndex {
    entries: Vec<PhraseEntry>,
}

impl PhraseIndex {
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<PhraseEntry> = Vec::new();
        for phrase in phrases {
            if let Some(entry) = PhraseEntry::new(phrase.as_ref()) {
                if !entries.iter().any(|e| e.key == entry.key) {
                    entries.push(entry);
                }
            }
        }
        entries.sort_by_key(|e| std::cmp::Reverse(e.word_count()));
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
