use confassist_lexicon::{fold, tokenize, Lexicon};

#[test]
fn academic_tables_are_populated() {
    let lexicon = Lexicon::academic_vietnamese();
    assert!(lexicon.dictionary().len() > 100);
    assert!(lexicon.phrases().len() >= 8);
    assert!(lexicon.is_stopword("của"));
    assert!(lexicon.is_stopword("the"));
    assert!(!lexicon.is_stopword("learning"));
}

#[test]
fn dictionary_restores_common_academic_words() {
    let lexicon = Lexicon::academic_vietnamese();
    let dict = lexicon.dictionary();
    assert_eq!(dict.lookup("nghien"), Some("nghiên"));
    assert_eq!(dict.lookup("phuong"), Some("phương"));
    assert_eq!(dict.lookup("duoc"), Some("được"));
    assert_eq!(dict.lookup("internet"), None);
}

#[test]
fn bai_bao_is_a_paper_not_a_report() {
    let lexicon = Lexicon::academic_vietnamese();
    let entry = lexicon
        .phrases()
        .iter()
        .find(|e| e.key == "bai bao")
        .expect("phrase present");
    assert_eq!(entry.canonical, "bài báo");
}

#[test]
fn every_phrase_key_is_the_fold_of_its_canonical_form() {
    let lexicon = Lexicon::academic_vietnamese();
    for entry in lexicon.phrases().iter() {
        assert_eq!(entry.key, fold(&entry.canonical));
    }
}

#[test]
fn builder_makes_isolated_tables() {
    let lexicon = Lexicon::builder()
        .word("mới")
        .phrase("phương pháp mới")
        .stopwords(["và"])
        .build();
    assert_eq!(lexicon.dictionary().len(), 1);
    assert_eq!(lexicon.phrases().len(), 1);
    assert!(lexicon.is_stopword("và"));
    assert_eq!(tokenize("phương pháp mới", 3).len(), 3);
}
