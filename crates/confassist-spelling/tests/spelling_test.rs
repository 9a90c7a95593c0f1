use std::sync::Arc;

use confassist_core::errors::LlmError;
use confassist_core::traits::{ContextualSuggestion, IContextualCorrector};
use confassist_core::CorrectionKind;
use confassist_lexicon::Lexicon;
use confassist_spelling::{apply_corrections, SpellingCorrector};

fn corrector() -> SpellingCorrector {
    SpellingCorrector::new(Arc::new(Lexicon::academic_vietnamese()))
}

struct FixedSuggestions(Vec<ContextualSuggestion>);

impl IContextualCorrector for FixedSuggestions {
    fn suggest_corrections(&self, _text: &str) -> Result<Vec<ContextualSuggestion>, LlmError> {
        Ok(self.0.clone())
    }
    fn is_available(&self) -> bool {
        true
    }
    fn name(&self) -> &str {
        "fixed"
    }
}

struct Failing;

impl IContextualCorrector for Failing {
    fn suggest_corrections(&self, _text: &str) -> Result<Vec<ContextualSuggestion>, LlmError> {
        Err(LlmError::Timeout { timeout_secs: 20 })
    }
    fn is_available(&self) -> bool {
        true
    }
    fn name(&self) -> &str {
        "failing"
    }
}

fn suggestion(original: &str, correct: &str) -> ContextualSuggestion {
    ContextualSuggestion {
        original: original.to_string(),
        correct: correct.to_string(),
        context: String::new(),
    }
}

#[test]
fn bai_bao_is_one_phrase_correction() {
    let corrections = corrector().correct("bai bao");
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].error_type, CorrectionKind::Phrase);
    assert_eq!(corrections[0].original, "bai bao");
    assert_eq!(corrections[0].suggested, "bài báo");
    assert_eq!(corrections[0].position, 0);
}

#[test]
fn capitalized_phrase_keeps_leading_capital() {
    let corrections = corrector().correct("Phuong phap nay");
    assert_eq!(corrections[0].suggested, "Phương pháp");
    assert_eq!(corrections[1].original, "nay");
    assert_eq!(corrections[1].suggested, "này");
}

#[test]
fn partially_accented_phrase_is_completed() {
    let corrections = corrector().correct("các kết qua");
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].original, "kết qua");
    assert_eq!(corrections[0].suggested, "kết quả");
}

#[test]
fn correctly_accented_text_is_left_alone() {
    let text = "Bài báo này trình bày kết quả nghiên cứu về hội đồng.";
    assert!(corrector().correct(text).is_empty());
}

#[test]
fn word_scan_restores_words_and_skips_short_ones() {
    let text = "Chung toi phat trien he thong";
    let report = corrector().check(text);
    let originals: Vec<_> = report.corrections.iter().map(|c| c.original.as_str()).collect();
    assert_eq!(originals, vec!["Chung", "toi", "phat", "trien", "thong"]);
    assert_eq!(report.suggested_text, "Chúng tôi phát triển he thống");
    assert_eq!(report.dictionary_corrections, 5);
}

#[test]
fn positions_are_byte_offsets() {
    let text = "Đây là ket qua";
    let corrections = corrector().correct(text);
    assert_eq!(corrections.len(), 1);
    let c = &corrections[0];
    assert!(text[c.position..].starts_with(&c.original));
    assert_eq!(c.position, "Đây là ".len());
}

#[test]
fn empty_text_yields_nothing() {
    let report = corrector().check("");
    assert!(report.corrections.is_empty());
    assert_eq!(report.suggested_text, "");
}

#[test]
fn contextual_suggestions_fill_in_after_dictionary() {
    let assistant = FixedSuggestions(vec![
        suggestion("moi", "mới"),
        // overlaps the phrase correction below
        suggestion("bao", "bảo"),
    ]);
    let corrector = corrector().with_contextual(Arc::new(assistant));
    let report = corrector.check("bai bao voi phuong phap moi");

    assert_eq!(report.dictionary_corrections, 3);
    assert_eq!(report.contextual_corrections, 1);
    let last = report.corrections.last().unwrap();
    assert_eq!(last.error_type, CorrectionKind::Contextual);
    assert_eq!(last.suggested, "mới");
    assert_eq!(report.suggested_text, "bài báo với phương pháp mới");
}

#[test]
fn contextual_failure_degrades_to_dictionary_only() {
    let corrector = corrector().with_contextual(Arc::new(Failing));
    let report = corrector.check("ket qua");
    assert_eq!(report.corrections.len(), 1);
    assert_eq!(report.contextual_corrections, 0);
}

#[test]
fn corrections_sorted_by_position() {
    let assistant = FixedSuggestions(vec![suggestion("xin", "xin chào")]);
    let corrector = corrector().with_contextual(Arc::new(assistant));
    let corrections = corrector.correct("xin bai bao");
    let positions: Vec<_> = corrections.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 4]);
}

#[test]
fn apply_is_consistent_with_check() {
    let corrector = corrector();
    let text = "Phan tich du lieu giao duc";
    let report = corrector.check(text);
    assert_eq!(apply_corrections(text, &report.corrections), report.suggested_text);
    assert_eq!(report.suggested_text, "Phân tích dữ liệu giáo dục");
}
