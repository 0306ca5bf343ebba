//! Audit sink adapters.

use std::sync::Mutex;

use gateways_types::{AuditSink, LogEntry};

/// Forwards audit entries to the `tracing` subscriber under the `audit`
/// target. Serialization of concurrent writes is the subscriber's job.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn append(&self, entry: LogEntry) {
        tracing::info!(
            target: "audit",
            family = %entry.family,
            at = %entry.at,
            "{}",
            entry.message
        );
    }
}

/// In-memory audit sink retaining entries in insertion order.
///
/// A mutex serializes concurrent appends. Used by tests and embeddable
/// wherever the audit trail should stay inspectable in-process.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries recorded so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, entry: LogEntry) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            // A poisoned mutex must not fail the payment flow.
            Err(_) => tracing::warn!(target: "audit", "audit sink poisoned, entry dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateways_types::GatewaySelector;

    #[test]
    fn test_memory_sink_keeps_insertion_order() {
        let sink = MemoryAuditSink::new();
        sink.append(LogEntry::new(GatewaySelector::PagSeguro, "first"));
        sink.append(LogEntry::new(GatewaySelector::Stripe, "second"));

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn test_memory_sink_tags_family() {
        let sink = MemoryAuditSink::new();
        sink.append(LogEntry::new(GatewaySelector::MercadoPago, "charged"));

        assert_eq!(sink.entries()[0].family, GatewaySelector::MercadoPago);
    }
}
