//! PostgreSQL adapter for AuditLogRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::domain::entities::{AuditEntry, AuditEntryId, NewAuditEntry};
use crate::domain::ports::AuditLogRepository;
use crate::entity::audit_logs;
use crate::error::DomainError;

/// PostgreSQL implementation of AuditLogRepository
pub struct PostgresAuditLogRepository {
    db: DatabaseConnection,
}

impl PostgresAuditLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<audit_logs::Model> for AuditEntry {
    type Error = DomainError;

    fn try_from(m: audit_logs::Model) -> Result<Self, Self::Error> {
        Ok(AuditEntry {
            id: AuditEntryId(m.id),
            action: m.action.parse().map_err(DomainError::Database)?,
            meta: m.meta,
            created_at: m.created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: &NewAuditEntry) -> Result<AuditEntry, DomainError> {
        let model = audit_logs::ActiveModel {
            id: Set(Uuid::new_v4()),
            action: Set(entry.action.to_string()),
            meta: Set(entry.meta.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }
}
