use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminator followed by whitespace.
static RE_SEGMENT_BREAK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[.!?;]\s+").ok());

/// Segments shorter than this (trimmed, in chars) carry too little signal.
const MIN_SEGMENT_CHARS: usize = 10;

/// Split `text` into sentence-like segments, keeping those whose trimmed
/// length exceeds ten characters.
pub fn split_segments(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = match RE_SEGMENT_BREAK.as_ref() {
        Some(re) => re.split(text).collect(),
        None => vec![text],
    };
    pieces
        .into_iter()
        .filter(|s| s.trim().chars().count() > MIN_SEGMENT_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators_followed_by_space() {
        let segments = split_segments("First sentence here. Second one is long! ok. v1.2 stays joined");
        assert_eq!(
            segments,
            vec!["First sentence here", "Second one is long", "v1.2 stays joined"]
        );
    }

    #[test]
    fn drops_short_segments() {
        assert!(split_segments("Short. Tiny; x").is_empty());
    }
}
