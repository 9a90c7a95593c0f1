//! # confassist-audit
//!
//! Audit trail for AI operations. [`AuditLogger`] turns service calls into
//! [`AuditEvent`](confassist_core::models::AuditEvent)s and hands them to an
//! injected [`IAuditSink`](confassist_core::traits::IAuditSink). Sinks write
//! one line per event and never fail the caller.

pub mod logger;
pub mod render;
pub mod sink;

pub use logger::{fingerprint, preview_output, AuditLogger, OperationLog};
pub use render::render_line;
pub use sink::{FileAuditSink, MemoryAuditSink, NullAuditSink};
