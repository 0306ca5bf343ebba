//! Audit log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selector::GatewaySelector;

/// One append-only audit line for a completed transaction.
///
/// Entries carry the family that produced them and have no identity beyond
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded
    pub at: DateTime<Utc>,
    /// The gateway family that produced the entry
    pub family: GatewaySelector,
    /// Human-readable audit message
    pub message: String,
}

impl LogEntry {
    pub fn new(family: GatewaySelector, message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            family,
            message: message.into(),
        }
    }
}
