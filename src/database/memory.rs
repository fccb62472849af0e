use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewNote, Note, NoteChanges};
use crate::database::repository::NoteRepository;

/// In-process NoteRepository. Notes live in insertion order and vanish with
/// the process; used by tests and `--memory` development runs.
#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn find_by_user(&self, user: &str) -> Result<Vec<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.user == user).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, note: NewNote) -> Result<Note, DatabaseError> {
        let saved = Note {
            id: Uuid::new_v4(),
            user: note.user,
            title: note.title,
            description: note.description,
            tag: note.tag,
            date: Utc::now(),
        };
        self.notes.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn update_by_id(&self, id: Uuid, changes: &NoteChanges) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        Ok(notes.iter_mut().find(|n| n.id == id).map(|note| {
            changes.apply_to(note);
            note.clone()
        }))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        Ok(notes
            .iter()
            .position(|n| n.id == id)
            .map(|index| notes.remove(index)))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(user: &str, title: &str) -> NewNote {
        NewNote {
            user: user.to_string(),
            title: title.to_string(),
            description: "some description".to_string(),
            tag: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order_per_user() {
        let repo = MemoryNoteRepository::new();
        repo.insert(new_note("a", "first")).await.unwrap();
        repo.insert(new_note("b", "other")).await.unwrap();
        repo.insert(new_note("a", "second")).await.unwrap();

        let titles: Vec<String> = repo
            .find_by_user("a")
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn update_and_delete_miss_on_unknown_id() {
        let repo = MemoryNoteRepository::new();
        let changes = NoteChanges {
            title: Some("new title".to_string()),
            ..Default::default()
        };
        assert!(repo.update_by_id(Uuid::new_v4(), &changes).await.unwrap().is_none());
        assert!(repo.delete_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_snapshot() {
        let repo = MemoryNoteRepository::new();
        let saved = repo.insert(new_note("a", "gone soon")).await.unwrap();

        let removed = repo.delete_by_id(saved.id).await.unwrap();
        assert_eq!(removed, Some(saved));
        assert!(repo.is_empty().await);
    }
}
