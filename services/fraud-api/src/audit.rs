use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditOperation {
    Insert,
    Update,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub record_id: Uuid,
    pub operation: AuditOperation,
    pub new_state: Value,
    pub executed_by: String,
    pub executed_at: DateTime<Utc>,
}

/// Append-only in-memory audit trail, capped at `max_entries`. Oldest
/// entries are dropped once the cap is reached.
pub struct AuditTrail {
    entries: RwLock<VecDeque<AuditEntry>>,
    max_entries: usize,
}

impl AuditTrail {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record<S: Serialize>(
        &self,
        operation: AuditOperation,
        record_id: Uuid,
        new_state: &S,
        executed_by: &str,
    ) {
        let entry = AuditEntry {
            record_id,
            operation,
            new_state: serde_json::to_value(new_state).unwrap_or(Value::Null),
            executed_by: executed_by.to_string(),
            executed_at: Utc::now(),
        };

        info!(
            record_id = %entry.record_id,
            operation = ?entry.operation,
            executed_by = %entry.executed_by,
            "audit entry recorded"
        );

        let mut entries = self.entries.write();
        if entries.len() == self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Most recent entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
