use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    Extension, Json,
};
use serde::Serialize;

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::services::{NoteService, UpdateNote};

#[derive(Debug, Serialize)]
pub struct UpdatedNote {
    pub note: Option<Note>,
}

/// PUT /api/notes/updatenote/:id - replace any of title, description, tag
///
/// 404 when the note does not exist, 401 when the caller does not own it.
/// A missing or non-JSON body changes nothing, so those answers still apply.
pub async fn update_note(
    State(notes): State<NoteService>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UpdatedNote>, ApiError> {
    let input = parse_update(&headers, &body)?;
    let note = notes.update(&user.id, &id, input).await?;
    Ok(Json(UpdatedNote { note }))
}

fn parse_update(headers: &HeaderMap, body: &[u8]) -> Result<UpdateNote, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) || !is_json(headers) {
        return Ok(UpdateNote::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::invalid_json(format!("Failed to parse the request body as JSON: {}", e)))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let essence = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}
