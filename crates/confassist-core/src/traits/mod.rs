//! Collaborator interfaces injected into the services.

pub mod assistant;
pub mod audit_sink;

pub use assistant::{ContextualSuggestion, IAbstractPolisher, IContextualCorrector};
pub use audit_sink::IAuditSink;
