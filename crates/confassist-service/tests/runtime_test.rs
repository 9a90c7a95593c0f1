use confassist_core::errors::ServiceError;
use confassist_core::models::api::SpellCheckRequest;
use confassist_core::AssistConfig;
use confassist_service::AssistRuntime;

fn request() -> SpellCheckRequest {
    SpellCheckRequest {
        text: "bai bao".to_string(),
        user_id: "author-1".to_string(),
        field_type: "title".to_string(),
    }
}

#[test]
fn open_writes_audit_file_under_root() {
    let root = tempfile::tempdir().unwrap();
    let config = AssistConfig::from_toml("[audit]\npath = \"logs/audit.log\"\n").unwrap();
    let runtime = AssistRuntime::open(config, root.path()).unwrap();

    runtime.author.spellcheck(&request()).unwrap();

    let content = std::fs::read_to_string(root.path().join("logs/audit.log")).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("| author-1 | author | author_spellcheck |"));
}

#[test]
fn unopenable_audit_path_is_an_audit_error() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir(root.path().join("audit.log")).unwrap();
    let config = AssistConfig::from_toml("[audit]\npath = \"audit.log\"\n").unwrap();

    let err = AssistRuntime::open(config, root.path()).unwrap_err();
    assert!(matches!(err, ServiceError::Audit(_)), "{err:?}");
}

#[test]
fn disabled_audit_opens_no_file() {
    let root = tempfile::tempdir().unwrap();
    let config = AssistConfig::from_toml("[audit]\nenabled = false\npath = \"audit.log\"\n").unwrap();
    let runtime = AssistRuntime::open(config, root.path()).unwrap();
    runtime.author.spellcheck(&request()).unwrap();
    assert!(!root.path().join("audit.log").exists());
}
