use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewNote, Note, NoteChanges};

/// Storage operations the note service depends on.
///
/// Implementations assign `id` and `date` on insert. Lookups by id that miss
/// return `Ok(None)` rather than an error.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes owned by `user`, oldest first
    async fn find_by_user(&self, user: &str) -> Result<Vec<Note>, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError>;

    async fn insert(&self, note: NewNote) -> Result<Note, DatabaseError>;

    /// Apply `changes` to the note with `id`, returning the updated document
    async fn update_by_id(&self, id: Uuid, changes: &NoteChanges) -> Result<Option<Note>, DatabaseError>;

    /// Remove the note with `id`, returning the removed document
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

const NOTE_COLUMNS: &str = "id, user_id, title, description, tag, date";

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn find_by_user(&self, user: &str) -> Result<Vec<Note>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM notes WHERE user_id = $1 ORDER BY date ASC, id ASC",
            NOTE_COLUMNS
        );
        let notes = sqlx::query_as::<_, Note>(&sql)
            .bind(user)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("SELECT {} FROM notes WHERE id = $1", NOTE_COLUMNS);
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, DatabaseError> {
        let sql = format!(
            "INSERT INTO notes ({}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            NOTE_COLUMNS, NOTE_COLUMNS
        );
        let saved = sqlx::query_as::<_, Note>(&sql)
            .bind(Uuid::new_v4())
            .bind(&note.user)
            .bind(&note.title)
            .bind(&note.description)
            .bind(&note.tag)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;
        Ok(saved)
    }

    async fn update_by_id(&self, id: Uuid, changes: &NoteChanges) -> Result<Option<Note>, DatabaseError> {
        let sql = format!(
            r#"
            UPDATE notes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                tag = COALESCE($4, tag)
            WHERE id = $1
            RETURNING {}
            "#,
            NOTE_COLUMNS
        );
        let updated = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.tag.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("DELETE FROM notes WHERE id = $1 RETURNING {}", NOTE_COLUMNS);
        let removed = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
