use confassist_core::CorrectionEntry;

/// Splice every correction into `text`.
///
/// Corrections are applied from the end of the text towards the start so
/// earlier byte offsets stay valid. An entry is skipped when its span does
/// not hold `original` in `text` or when it overlaps a span already applied.
pub fn apply_corrections(text: &str, corrections: &[CorrectionEntry]) -> String {
    let mut sorted: Vec<&CorrectionEntry> = corrections.iter().collect();
    sorted.sort_by(|a, b| b.position.cmp(&a.position));

    let mut result = text.to_string();
    // Start of the leftmost span applied so far.
    let mut floor = usize::MAX;
    for correction in sorted {
        let end = correction.end();
        if end > floor {
            continue;
        }
        if text.get(correction.position..end) != Some(correction.original.as_str()) {
            tracing::debug!(
                position = correction.position,
                original = %correction.original,
                "correction no longer matches text; skipped"
            );
            continue;
        }
        result.replace_range(correction.position..end, &correction.suggested);
        floor = correction.position;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use confassist_core::CorrectionKind;

    fn entry(original: &str, suggested: &str, position: usize) -> CorrectionEntry {
        CorrectionEntry {
            original: original.to_string(),
            suggested: suggested.to_string(),
            position,
            error_type: CorrectionKind::Spelling,
            explanation: String::new(),
        }
    }

    #[test]
    fn applies_in_any_input_order() {
        let text = "ket qua tot";
        let corrections = vec![entry("ket", "kết", 0), entry("qua", "quả", 4)];
        assert_eq!(apply_corrections(text, &corrections), "kết quả tot");
        let reversed: Vec<_> = corrections.into_iter().rev().collect();
        assert_eq!(apply_corrections(text, &reversed), "kết quả tot");
    }

    #[test]
    fn skips_mismatched_span() {
        let text = "ket qua";
        let corrections = vec![entry("xyz", "abc", 0), entry("qua", "quả", 4)];
        assert_eq!(apply_corrections(text, &corrections), "ket quả");
    }

    #[test]
    fn skips_out_of_range_and_non_boundary_spans() {
        let text = "bài";
        let corrections = vec![entry("x", "y", 2), entry("bài", "bai", 10)];
        assert_eq!(apply_corrections(text, &corrections), "bài");
    }

    #[test]
    fn keeps_rightmost_of_overlapping_spans() {
        let text = "bai bao";
        let corrections = vec![entry("bai bao", "bài báo", 0), entry("bao", "báo", 4)];
        assert_eq!(apply_corrections(text, &corrections), "bai báo");
    }
}
