use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::services::NoteService;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "iNotebook API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "notes": "/api/notes/{fetchallnotes,addnote,updatenote/:id,deletenote/:id} (auth-token required)",
        }
    }))
}

/// GET /health - reports whether the note store answers
pub async fn health(State(notes): State<NoteService>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match notes.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
                .into_response()
        }
    }
}
