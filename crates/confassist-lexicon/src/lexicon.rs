use crate::data;
use crate::dictionary::DictionaryIndex;
use crate::phrases::PhraseIndex;
use crate::stopwords::StopwordSet;

/// Immutable bundle of language tables. Build once, share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: DictionaryIndex,
    phrases: PhraseIndex,
    stopwords: StopwordSet,
}

impl Lexicon {
    /// The built-in academic Vietnamese tables.
    pub fn academic_vietnamese() -> Self {
        LexiconBuilder::new()
            .words(data::ACADEMIC_WORDS.iter().copied())
            .phrases(data::ACADEMIC_PHRASES.iter().copied())
            .stopwords(data::STOPWORDS.iter().copied())
            .build()
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    pub fn phrases(&self) -> &PhraseIndex {
        &self.phrases
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

/// Collects table sources, then indexes them in one go.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    words: Vec<String>,
    phrases: Vec<String>,
    stopwords: Vec<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrases.push(phrase.into());
        self
    }

    pub fn phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases.extend(phrases.into_iter().map(Into::into));
        self
    }

    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(stopwords.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Lexicon {
        let lexicon = Lexicon {
            dictionary: DictionaryIndex::from_words(&self.words),
            phrases: PhraseIndex::from_phrases(&self.phrases),
            stopwords: StopwordSet::from_words(&self.stopwords),
        };
        tracing::debug!(
            words = lexicon.dictionary.len(),
            phrases = lexicon.phrases.len(),
            stopwords = lexicon.stopwords.len(),
            "lexicon built"
        );
        lexicon
    }
}
