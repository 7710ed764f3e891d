//! PostgreSQL adapter for NoteRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::{NewNote, Note, NoteId};
use crate::domain::ports::NoteRepository;
use crate::entity::notes;
use crate::error::DomainError;

/// PostgreSQL implementation of NoteRepository
pub struct PostgresNoteRepository {
    db: DatabaseConnection,
}

impl PostgresNoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<notes::Model> for Note {
    fn from(m: notes::Model) -> Self {
        Note {
            id: NoteId(m.id),
            video_id: m.video_id,
            content: m.content,
            tags: serde_json::from_value(m.tags).unwrap_or_default(),
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

/// Patterns PostgreSQL's regex dialect rejects (`\p{L}` for one) are
/// validation errors.
fn search_error(e: DbErr) -> DomainError {
    let message = e.to_string();
    if message.contains("invalid regular expression") {
        DomainError::Validation(format!("Invalid search pattern: {}", message))
    } else {
        DomainError::Database(message)
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, DomainError> {
        let model = notes::ActiveModel {
            id: Set(Uuid::new_v4()),
            video_id: Set(note.video_id.clone()),
            content: Set(note.content.clone()),
            tags: Set(Value::from(note.tags.clone())),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn search(&self, pattern: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let mut query = notes::Entity::find().order_by_desc(notes::Column::CreatedAt);
        if let Some(pattern) = pattern {
            query = query.filter(Expr::cust_with_values(
                "content ~* $1",
                [pattern.to_string()],
            ));
        }

        let results = query.all(&self.db).await.map_err(search_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}
