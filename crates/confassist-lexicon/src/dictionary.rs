use std::collections::HashMap;

use crate::normalizer::fold;

/// Folded key -> canonical accented word.
///
/// Words without diacritics fold to themselves and are not indexed. When two
/// words share a key the later one wins.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: HashMap<String, String>,
}

impl DictionaryIndex {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let key = fold(word);
            if key != word.to_lowercase() {
                entries.insert(key, word.to_string());
            }
        }
        Self { entries }
    }

    /// Canonical form for an already folded key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
