use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use confassist_core::errors::AuditError;
use confassist_core::models::AuditEvent;
use confassist_core::traits::IAuditSink;

use crate::render::render_line;

/// Lock a mutex, taking the data back from a poisoned lock. A panic in
/// another request must not silence the audit trail.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Appends one line per event to a file, flushing after each record.
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileAuditSink {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |e: std::io::Error| AuditError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(open_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> Result<(), AuditError> {
        let mut writer = lock(&self.writer);
        writeln!(writer, "{line}")
            .and_then(|_| writer.flush())
            .map_err(|e| AuditError::Write {
                reason: e.to_string(),
            })
    }
}

impl IAuditSink for FileAuditSink {
    fn append(&self, event: &AuditEvent) {
        if let Err(e) = self.write_line(&render_line(event)) {
            tracing::warn!(path = %self.path.display(), error = %e, "audit record dropped");
        }
    }
}

/// Keeps events in memory. Used by tests and embedders that ship the trail
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        lock(&self.events).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.events).is_empty()
    }

    pub fn operation_count(&self) -> usize {
        lock(&self.events).iter().filter(|e| e.is_operation()).count()
    }

    pub fn feature_disabled_count(&self) -> usize {
        lock(&self.events)
            .iter()
            .filter(|e| e.is_feature_disabled())
            .count()
    }

    /// Rendered lines, as a file sink would write them.
    pub fn lines(&self) -> Vec<String> {
        lock(&self.events).iter().map(render_line).collect()
    }

    pub fn clear(&self) {
        lock(&self.events).clear();
    }
}

impl IAuditSink for MemoryAuditSink {
    fn append(&self, event: &AuditEvent) {
        lock(&self.events).push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditSink;

impl IAuditSink for NullAuditSink {
    fn append(&self, _event: &AuditEvent) {}
}
