//! Audit log
//!
//! Records completed actions. Writing an entry never fails the action it
//! describes: store errors are logged and swallowed, and nothing upstream is
//! retried or undone because of them.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::{AuditAction, NewAuditEntry};
use crate::domain::ports::AuditLogRepository;

pub struct AuditLog<A>
where
    A: AuditLogRepository,
{
    entries: Arc<A>,
}

impl<A> Clone for AuditLog<A>
where
    A: AuditLogRepository,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<A> AuditLog<A>
where
    A: AuditLogRepository,
{
    pub fn new(entries: Arc<A>) -> Self {
        Self { entries }
    }

    /// Append a timestamped entry, best effort
    pub async fn record(&self, action: AuditAction, meta: Value) {
        let entry = NewAuditEntry { action, meta };

        match self.entries.append(&entry).await {
            Ok(stored) => {
                tracing::debug!(action = %action, entry_id = %stored.id, "Audit entry recorded")
            }
            Err(e) => tracing::warn!(action = %action, error = %e, "Failed to record audit entry"),
        }
    }
}
