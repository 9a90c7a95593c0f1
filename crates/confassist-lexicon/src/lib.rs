//! # confassist-lexicon
//!
//! Static language tables shared read-only by every request: the
//! diacritic normalizer, the correction dictionary, the academic phrase
//! index, the stopword set, and the word tokenizer.
//!
//! Tables are built once into a [`Lexicon`] and injected (usually as an
//! `Arc<Lexicon>`) into the corrector and the keyword extractor.

pub mod data;
pub mod dictionary;
pub mod lexicon;
pub mod normalizer;
pub mod phrases;
pub mod stopwords;
pub mod tokenizer;

pub use dictionary::DictionaryIndex;
pub use lexicon::{Lexicon, LexiconBuilder};
pub use normalizer::{fold, is_stripped, match_leading_case, normalize, FoldedText};
pub use phrases::{PhraseEntry, PhraseIndex};
pub use stopwords::StopwordSet;
pub use tokenizer::{tokenize, Token};
