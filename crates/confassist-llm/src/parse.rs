//! Parsing of assistant replies.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use confassist_core::errors::LlmError;
use confassist_core::traits::ContextualSuggestion;

/// A JSON object inside a Markdown code fence, optionally tagged `json`.
static RE_JSON_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").ok());

#[derive(Debug, Default, Deserialize)]
struct ErrorsEnvelope {
    #[serde(default)]
    errors: Vec<RawSuggestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSuggestion {
    original: String,
    #[serde(alias = "suggested")]
    correct: String,
    context: String,
}

/// The JSON body of a reply, unwrapped from a code fence when present.
pub fn json_body(reply: &str) -> &str {
    let fenced = RE_JSON_FENCE
        .as_ref()
        .and_then(|re| re.captures(reply))
        .and_then(|caps| caps.get(1));
    match fenced {
        Some(m) => m.as_str(),
        None => reply.trim(),
    }
}

/// Parse `{"errors": [...]}` into suggestions, dropping incomplete or no-op
/// entries.
pub fn parse_suggestions(reply: &str) -> Result<Vec<ContextualSuggestion>, LlmError> {
    let envelope: ErrorsEnvelope =
        serde_json::from_str(json_body(reply)).map_err(|e| LlmError::MalformedResponse {
            reason: format!("JSON parse error: {e}"),
        })?;

    Ok(envelope
        .errors
        .into_iter()
        .filter(|s| !s.original.is_empty() && !s.correct.is_empty() && s.original != s.correct)
        .map(|s| ContextualSuggestion {
            original: s.original,
            correct: s.correct,
            context: s.context,
        })
        .collect())
}
