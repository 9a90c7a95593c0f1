//! Tests for the ConfAssist configuration system.

use std::sync::Mutex;

use confassist_core::config::AssistConfig;
use confassist_core::errors::ConfigError;
use confassist_core::models::AiFeature;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CONFASSIST_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "CONFASSIST_ENABLE_AUTHOR_SPELLCHECK",
        "CONFASSIST_ENABLE_AUTHOR_ABSTRACT_POLISHING",
        "CONFASSIST_ENABLE_AUTHOR_KEYWORD_SUGGESTION",
        "CONFASSIST_ENABLE_REVIEWER_SUMMARY",
        "CONFASSIST_ENABLE_REVIEWER_SIMILARITY",
        "CONFASSIST_ENABLE_AUDIT_LOGGING",
        "CONFASSIST_AUDIT_LOG_PATH",
        "CONFASSIST_HASH_INPUT_IN_LOGS",
        "CONFASSIST_PRESERVE_DOUBLE_BLIND",
        "CONFASSIST_BIND_ADDR",
        "CONFASSIST_MAX_KEYWORDS",
        "CONFASSIST_LLM_API_KEY",
        "CONFASSIST_LLM_MODEL",
        "CONFASSIST_LLM_BASE_URL",
        "CONFASSIST_LLM_TIMEOUT_SECS",
        "GROQ_API_KEY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_enable_everything() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = AssistConfig::load(dir.path()).unwrap();

    for feature in AiFeature::ALL {
        assert!(config.is_enabled(feature), "{feature} should default to on");
    }
    assert!(config.audit.effective_enabled());
    assert!(config.privacy.effective_hash_input());
    assert!(config.privacy.effective_preserve_double_blind());
    assert_eq!(config.limits.effective_max_text_length(), 10_000);
    assert_eq!(config.limits.effective_max_abstract_length(), 5_000);
    assert_eq!(config.limits.effective_max_keywords(), 10);
    assert_eq!(config.llm.effective_model(), "llama-3.3-70b-versatile");
    assert!(!config.llm.is_configured());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("confassist.toml"),
        r#"
[features]
author_spellcheck = false
reviewer_similarity = false

[limits]
max_keywords = 7
"#,
    )
    .unwrap();
    std::env::set_var("CONFASSIST_ENABLE_AUTHOR_SPELLCHECK", "true");

    let config = AssistConfig::load(dir.path()).unwrap();

    assert!(config.is_enabled(AiFeature::AuthorSpellcheck));
    assert!(!config.is_enabled(AiFeature::ReviewerSimilarity));
    assert_eq!(config.limits.effective_max_keywords(), 7);

    clear_env_vars();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("confassist.toml"), "not = [valid").unwrap();

    match AssistConfig::load(dir.path()) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[test]
fn out_of_range_values_fail_validation() {
    let result = AssistConfig::from_toml("[llm]\ntemperature = 3.5\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    let result = AssistConfig::from_toml("[limits]\nsummary_min_words = 300\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));

    let result = AssistConfig::from_toml("[limits]\nmax_keywords = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn placeholder_api_key_counts_as_unset() {
    let config = AssistConfig::from_toml("[llm]\napi_key = \"your_groq_api_key_here\"\n").unwrap();
    assert!(!config.llm.is_configured());

    let config = AssistConfig::from_toml("[llm]\napi_key = \"gsk_live\"\n").unwrap();
    assert_eq!(config.llm.effective_api_key(), Some("gsk_live"));
}

#[test]
fn groq_env_key_is_picked_up() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("GROQ_API_KEY", "gsk_from_env");
    let config = AssistConfig::load(dir.path()).unwrap();
    assert_eq!(config.llm.effective_api_key(), Some("gsk_from_env"));

    clear_env_vars();
}

#[test]
fn feature_status_reflects_flags() {
    let config = AssistConfig::from_toml(
        "[features]\nauthor_abstract_polishing = false\n[audit]\nenabled = false\n",
    )
    .unwrap();
    let status = config.feature_status();
    assert!(status.author_features.spellcheck);
    assert!(!status.author_features.abstract_polishing);
    assert!(status.reviewer_features.summary);
    assert!(!status.audit_logging);
}

#[test]
fn toml_round_trip_keeps_overrides() {
    let config = AssistConfig::from_toml("[service]\nbind_addr = \"127.0.0.1:9000\"\n").unwrap();
    let text = config.to_toml().unwrap();
    let back = AssistConfig::from_toml(&text).unwrap();
    assert_eq!(back.service.effective_bind_addr(), "127.0.0.1:9000");
}
