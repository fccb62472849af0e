use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_TAG: &str = "General";

/// A stored note. `user` is the owning user id and never changes after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sqlx(rename = "user_id")]
    pub user: String,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub date: DateTime<Utc>,
}

/// A validated note ready for insert. The store assigns `id` and `date`.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user: String,
    pub title: String,
    pub description: String,
    pub tag: String,
}

/// Field replacements for an update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(tag) = &self.tag {
            note.tag = tag.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Note {
        Note {
            id: Uuid::new_v4(),
            user: "user-a".to_string(),
            title: "Shopping".to_string(),
            description: "Buy milk".to_string(),
            tag: "personal".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn serializes_id_as_underscore_id() {
        let note = sample();
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["_id"], note.id.to_string());
        assert!(value.get("id").is_none());
        assert_eq!(value["user"], "user-a");
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut note = sample();
        let changes = NoteChanges {
            tag: Some("errands".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut note);
        assert_eq!(note.tag, "errands");
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.description, "Buy milk");
    }
}
