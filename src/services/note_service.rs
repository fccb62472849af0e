use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{NewNote, Note, NoteChanges, DEFAULT_TAG};
use crate::database::{DatabaseError, NoteRepository};
use crate::services::validation::{validate_new_note, FieldError};

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Note not found")]
    NotFound,

    #[error("Note belongs to another user")]
    NotAllowed,

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// Body of a create request. Any `user` field a client sends is ignored;
/// a missing or null title or description fails validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Body of an update request. Missing or empty fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl UpdateNote {
    pub fn into_changes(self) -> NoteChanges {
        fn provided(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        NoteChanges {
            title: provided(self.title),
            description: provided(self.description),
            tag: provided(self.tag),
        }
    }
}

/// Ownership-checked CRUD over a user's notes
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user: &str) -> Result<Vec<Note>, NoteError> {
        Ok(self.repo.find_by_user(user).await?)
    }

    pub async fn create(&self, user: &str, input: CreateNote) -> Result<Note, NoteError> {
        let title = input.title.unwrap_or_default();
        let description = input.description.unwrap_or_default();

        let errors = validate_new_note(&title, &description);
        if !errors.is_empty() {
            return Err(NoteError::Validation(errors));
        }

        let tag = input
            .tag
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        let note = self
            .repo
            .insert(NewNote {
                user: user.to_string(),
                title,
                description,
                tag,
            })
            .await?;

        tracing::debug!("Created note {} for user {}", note.id, user);
        Ok(note)
    }

    /// Returns `Ok(None)` when the note disappeared between the ownership
    /// check and the write.
    pub async fn update(&self, user: &str, id: &str, input: UpdateNote) -> Result<Option<Note>, NoteError> {
        let existing = self.owned_note(user, id).await?;
        let changes = input.into_changes();

        let updated = self.repo.update_by_id(existing.id, &changes).await?;
        if updated.is_none() {
            tracing::warn!("Note {} vanished before update was applied", existing.id);
        }
        Ok(updated)
    }

    /// Returns the removed snapshot, or `Ok(None)` under the same race as `update`
    pub async fn delete(&self, user: &str, id: &str) -> Result<Option<Note>, NoteError> {
        let existing = self.owned_note(user, id).await?;

        let removed = self.repo.delete_by_id(existing.id).await?;
        if removed.is_some() {
            tracing::info!("Deleted note {} for user {}", existing.id, user);
        }
        Ok(removed)
    }

    pub async fn health_check(&self) -> Result<(), NoteError> {
        Ok(self.repo.health_check().await?)
    }

    /// Existence is checked before ownership, so a missing note is never
    /// reported as NotAllowed.
    async fn owned_note(&self, user: &str, id: &str) -> Result<Note, NoteError> {
        let id = Uuid::parse_str(id).map_err(|_| NoteError::NotFound)?;

        let note = self.repo.find_by_id(id).await?.ok_or(NoteError::NotFound)?;

        if note.user != user {
            tracing::warn!("User {} attempted to modify note {} owned by another user", user, id);
            return Err(NoteError::NotAllowed);
        }

        Ok(note)
    }
}
