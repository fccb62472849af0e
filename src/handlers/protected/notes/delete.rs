use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::NoteService;

#[derive(Debug, Serialize)]
pub struct DeletedNote {
    #[serde(rename = "Success")]
    pub success: &'static str,
    pub note: Option<Note>,
}

/// DELETE /api/notes/deletenote/:id - permanently remove a note the caller owns
pub async fn delete_note(
    State(notes): State<NoteService>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeletedNote>, ApiError> {
    let note = notes.delete(&user.id, &id).await?;
    Ok(Json(DeletedNote {
        success: "Note has been deleted",
        note,
    }))
}
