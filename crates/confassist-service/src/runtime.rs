//! AssistRuntime: owns the shared lexicon and both services.

use std::path::Path;
use std::sync::Arc;

use confassist_audit::{AuditLogger, FileAuditSink, NullAuditSink};
use confassist_core::config::FeatureStatus;
use confassist_core::errors::ServiceResult;
use confassist_core::traits::IAuditSink;
use confassist_core::AssistConfig;
use confassist_lexicon::Lexicon;
use confassist_llm::{build_assistants, Assistants};

use crate::{AuthorService, ReviewerService};

/// Everything a request handler needs, built once at startup and shared.
#[derive(Debug)]
pub struct AssistRuntime {
    pub config: Arc<AssistConfig>,
    pub lexicon: Arc<Lexicon>,
    pub author: AuthorService,
    pub reviewer: ReviewerService,
}

impl AssistRuntime {
    /// Build for a deployment rooted at `root`: the audit file from
    /// `audit.path` is opened relative to it, or nothing is written when
    /// audit logging is off.
    pub fn open(config: AssistConfig, root: &Path) -> ServiceResult<Self> {
        let sink: Arc<dyn IAuditSink> = if config.audit.effective_enabled() {
            let path = root.join(config.audit.effective_path());
            let sink = FileAuditSink::open(&path)?;
            tracing::info!(path = %path.display(), "audit log opened");
            Arc::new(sink)
        } else {
            tracing::info!("audit logging disabled");
            Arc::new(NullAuditSink)
        };
        Ok(Self::new(config, sink))
    }

    /// Build with the built-in academic lexicon and assistants derived from
    /// `config.llm`.
    pub fn new(config: AssistConfig, sink: Arc<dyn IAuditSink>) -> Self {
        let assistants = build_assistants(&config.llm);
        Self::with_parts(
            config,
            Arc::new(Lexicon::academic_vietnamese()),
            assistants,
            sink,
        )
    }

    /// Build from explicit parts.
    pub fn with_parts(
        config: AssistConfig,
        lexicon: Arc<Lexicon>,
        assistants: Assistants,
        sink: Arc<dyn IAuditSink>,
    ) -> Self {
        let config = Arc::new(config);
        let audit = AuditLogger::from_config(&config, sink);
        let author = AuthorService::new(config.clone(), lexicon.clone(), &assistants, audit.clone());
        let reviewer = ReviewerService::new(config.clone(), audit);

        tracing::info!(
            dictionary = lexicon.dictionary().len(),
            phrases = lexicon.phrases().len(),
            audit = config.audit.effective_enabled(),
            "runtime initialized"
        );

        Self {
            config,
            lexicon,
            author,
            reviewer,
        }
    }

    pub fn feature_status(&self) -> FeatureStatus {
        self.config.feature_status()
    }
}
