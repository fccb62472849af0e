use axum::{extract::State, Extension, Json};

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::NoteService;

/// GET /api/notes/fetchallnotes - every note owned by the caller
pub async fn fetch_all_notes(
    State(notes): State<NoteService>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let list = notes.list(&user.id).await?;
    Ok(Json(list))
}
