use crate::models::AuditEvent;

/// Append-only audit destination shared by every request.
///
/// Implementations serialize concurrent appends and must not fail the
/// caller: write errors are reported through `tracing` and dropped.
pub trait IAuditSink: Send + Sync {
    fn append(&self, event: &AuditEvent);
}
