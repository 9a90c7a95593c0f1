//! Vietnamese diacritic folding.
//!
//! `normalize` maps every accented Vietnamese letter to its base letter and
//! drops the Vietnamese combining marks found in decomposed input. All other
//! characters pass through untouched, so the function is total over any
//! Unicode input.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

/// Precomposed letters grouped by the base letter they fold to.
const FOLD_GROUPS: &[(&str, char)] = &[
    ("àáảãạăằắẳẵặâầấẩẫậ", 'a'),
    ("ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬ", 'A'),
    ("èéẻẽẹêềếểễệ", 'e'),
    ("ÈÉẺẼẸÊỀẾỂỄỆ", 'E'),
    ("ìíỉĩị", 'i'),
    ("ÌÍỈĨỊ", 'I'),
    ("òóỏõọôồốổỗộơờớởỡợ", 'o'),
    ("ÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢ", 'O'),
    ("ùúủũụưừứửữự", 'u'),
    ("ÙÚỦŨỤƯỪỨỬỮỰ", 'U'),
    ("ỳýỷỹỵ", 'y'),
    ("ỲÝỶỸỴ", 'Y'),
    ("đ", 'd'),
    ("Đ", 'D'),
];

/// Tone marks (grave, acute, tilde, hook above, dot below) and vowel
/// modifiers (circumflex, breve, horn) used by decomposed Vietnamese text.
const VIETNAMESE_COMBINING_MARKS: [char; 8] = [
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0306}', '\u{0309}', '\u{031B}', '\u{0323}',
];

static FOLD_TABLE: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    FOLD_GROUPS
        .iter()
        .flat_map(|(letters, base)| letters.chars().map(move |c| (c, *base)))
        .collect()
});

/// Fold a single character. `None` means the character is a Vietnamese
/// combining mark and is dropped.
fn fold_char(c: char) -> Option<char> {
    if VIETNAMESE_COMBINING_MARKS.contains(&c) {
        return None;
    }
    Some(FOLD_TABLE.get(&c).copied().unwrap_or(c))
}

/// Strip Vietnamese diacritics, preserving case.
pub fn normalize(text: &str) -> String {
    text.chars().filter_map(fold_char).collect()
}

/// Lookup key form: diacritics stripped, then lowercased.
pub fn fold(text: &str) -> String {
    normalize(text).to_lowercase()
}

/// True when `normalize(text) == text`.
pub fn is_stripped(text: &str) -> bool {
    text.chars().all(|c| fold_char(c) == Some(c))
}

/// Copy the case of `source`'s first letter onto `canonical`'s first letter.
/// The rest of `canonical` is kept as is.
pub fn match_leading_case(source: &str, canonical: &str) -> String {
    let upper = source
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase);

    let mut chars = canonical.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
struct CharSpan {
    folded: usize,
    start: usize,
    end: usize,
}

/// Folded shadow of a text that remembers where each folded character came
/// from, so matches found on the shadow can be mapped back to byte ranges
/// of the original.
#[derive(Debug, Clone)]
pub struct FoldedText {
    text: String,
    spans: Vec<CharSpan>,
}

impl FoldedText {
    pub fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut spans: Vec<CharSpan> = Vec::with_capacity(original.len());

        for (start, c) in original.char_indices() {
            let end = start + c.len_utf8();
            match fold_char(c) {
                // A dropped mark belongs to the preceding letter.
                None => {
                    if let Some(last) = spans.last_mut() {
                        last.end = end;
                    }
                }
                Some(base) => {
                    for lower in base.to_lowercase() {
                        spans.push(CharSpan {
                            folded: text.len(),
                            start,
                            end,
                        });
                        text.push(lower);
                    }
                }
            }
        }

        Self { text, spans }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Map a byte range of the folded text back to the original text.
    /// Returns `None` for empty ranges or ranges that do not start on a
    /// folded character boundary.
    pub fn original_range(&self, start: usize, end: usize) -> Option<Range<usize>> {
        if start >= end {
            return None;
        }
        let first = self
            .spans
            .binary_search_by_key(&start, |s| s.folded)
            .ok()?;
        let last = self
            .spans
            .partition_point(|s| s.folded < end)
            .checked_sub(1)?;
        Some(self.spans[first].start..self.spans[last].end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_tone_of_a() {
        assert_eq!(normalize("àáảãạăằắẳẵặâầấẩẫậ"), "a".repeat(17));
    }

    #[test]
    fn preserves_case() {
        assert_eq!(normalize("Nghiên Cứu ĐẠI HỌC"), "Nghien Cuu DAI HOC");
    }

    #[test]
    fn passes_other_characters_through() {
        assert_eq!(normalize("naïve café 42 ß 日本"), "naïve café 42 ß 日本");
    }

    #[test]
    fn drops_decomposed_marks() {
        // "báo" as b + a + U+0301 + o
        assert_eq!(normalize("ba\u{0301}o"), "bao");
        // Non-Vietnamese combining marks survive.
        assert_eq!(normalize("a\u{0308}"), "a\u{0308}");
    }

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("Phương Pháp"), "phuong phap");
        assert!(is_stripped("phuong phap"));
        assert!(!is_stripped("phương"));
    }

    #[test]
    fn leading_case() {
        assert_eq!(match_leading_case("Bai", "bài"), "Bài");
        assert_eq!(match_leading_case("ho", "Hồ"), "hồ");
        assert_eq!(match_leading_case("KET", "kết"), "Kết");
        assert_eq!(match_leading_case("x", ""), "");
    }

    #[test]
    fn folded_text_maps_back_to_original_bytes() {
        let original = "Kết quả tốt";
        let shadow = FoldedText::new(original);
        assert_eq!(shadow.as_str(), "ket qua tot");
        let range = shadow.original_range(0, 7).unwrap();
        assert_eq!(&original[range], "Kết quả");
    }

    #[test]
    fn folded_text_absorbs_trailing_marks() {
        let original = "ba\u{0301}o cao";
        let shadow = FoldedText::new(original);
        assert_eq!(shadow.as_str(), "bao cao");
        let range = shadow.original_range(0, 3).unwrap();
        assert_eq!(&original[range], "ba\u{0301}o");
    }

    #[test]
    fn empty_range_is_none() {
        let shadow = FoldedText::new("abc");
        assert!(shadow.original_range(1, 1).is_none());
    }
}
