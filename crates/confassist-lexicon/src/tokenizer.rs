//! Word tokenizer for mixed Vietnamese/English text.

use regex::Regex;
use std::sync::LazyLock;

/// ASCII letters plus every precomposed Vietnamese letter, both cases.
const LETTERS: &str = "a-zA-Z\
àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ\
ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴĐ";

/// Maximal letter runs bounded by word boundaries. A run touching a digit
/// or another word character is not a word.
static RE_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"\b[{LETTERS}]+\b")).ok());

/// A word and its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Words of at least `min_chars` letters, left to right.
pub fn tokenize(text: &str, min_chars: usize) -> Vec<Token<'_>> {
    let Some(re) = RE_WORD.as_ref() else {
        tracing::warn!("word pattern failed to compile; tokenizer yields nothing");
        return Vec::new();
    };
    re.find_iter(text)
        .filter(|m| m.as_str().chars().count() >= min_chars)
        .map(|m| Token {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
