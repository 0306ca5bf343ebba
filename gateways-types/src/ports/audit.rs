//! Audit sink port.

use crate::domain::LogEntry;

/// Append-only destination for audit entries.
///
/// The core guarantees ordering and family-tagging of entries, not their
/// storage medium. Shared sinks serialize concurrent writes so interleaved
/// lines are never corrupted; append failures stay inside the sink.
pub trait AuditSink: Send + Sync {
    fn append(&self, entry: LogEntry);
}
