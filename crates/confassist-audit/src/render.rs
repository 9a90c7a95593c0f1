//! Text form of audit events, one line each.

use confassist_core::models::AuditEvent;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an event as a single `|`-separated line (no trailing newline).
pub fn render_line(event: &AuditEvent) -> String {
    match event {
        AuditEvent::Operation(r) => {
            let mut line = format!(
                "{} | {} | {} | {} | {} | {} | applied={}",
                r.timestamp.format(TIMESTAMP_FORMAT),
                field(&r.user_id),
                r.user_role,
                r.feature,
                field(&r.input_fingerprint),
                field(&r.output_preview),
                r.applied
            );
            if let Some(metadata) = &r.metadata {
                line.push_str(&format!(" | metadata={}", field(&metadata.to_string())));
            }
            line
        }
        AuditEvent::Error {
            timestamp,
            user_id,
            feature,
            message,
            metadata,
        } => {
            let mut line = format!(
                "{} | ERROR | {} | {} | {}",
                timestamp.format(TIMESTAMP_FORMAT),
                field(user_id),
                feature,
                field(message)
            );
            if let Some(metadata) = metadata {
                line.push_str(&format!(" | {}", field(&metadata.to_string())));
            }
            line
        }
        AuditEvent::FeatureDisabled {
            timestamp,
            user_id,
            feature,
        } => format!(
            "{} | FEATURE_DISABLED | {} | {}",
            timestamp.format(TIMESTAMP_FORMAT),
            field(user_id),
            feature
        ),
    }
}

/// Free text inside a record. Line breaks become spaces and `|` is
/// escaped, so a value can neither end the record nor fake a field.
fn field(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' | '\n' => out.push(' '),
            '|' => out.push_str("\\|"),
            c => out.push(c),
        }
    }
    out
}
