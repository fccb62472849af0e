use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{CreateNote, NoteService};

/// POST /api/notes/addnote - create a note owned by the caller
///
/// Expected Input:
/// ```json
/// { "title": "Shopping", "description": "Buy milk", "tag": "personal" }
/// ```
///
/// `title` needs at least 3 characters and `description` at least 5; `tag`
/// defaults to "General". The response is the stored note.
pub async fn add_note(
    State(notes): State<NoteService>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(input) = payload?;
    let note = notes.create(&user.id, input).await?;
    Ok(Json(note))
}
