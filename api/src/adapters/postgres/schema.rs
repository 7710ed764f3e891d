//! Schema bootstrap for the console's tables

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::DomainError;

const INIT_SQL: &str = include_str!("../../../migrations/0001_init.sql");

/// Create the tables if they are missing. Safe to run on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    for statement in INIT_SQL.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        db.execute_unprepared(statement)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }
    Ok(())
}
