#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use inotebook_api::auth::TokenAuthority;
use inotebook_api::config::AppConfig;
use inotebook_api::database::models::{NewNote, Note, NoteChanges};
use inotebook_api::database::{DatabaseError, MemoryNoteRepository, NoteRepository};
use inotebook_api::{app, AppState};

pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

/// Router over a fresh in-memory store; clones share the same notes
pub fn test_app() -> Router {
    app_with_repo(Arc::new(MemoryNoteRepository::new()))
}

pub fn app_with_repo(repo: Arc<dyn NoteRepository>) -> Router {
    let authority = TokenAuthority::new(TEST_JWT_SECRET).expect("test secret is non-empty");

    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;

    app(AppState::new(repo, authority), &config)
}

/// Every call fails the way an exhausted pool does
pub struct FailingRepository;

fn pool_timeout() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl NoteRepository for FailingRepository {
    async fn find_by_user(&self, _user: &str) -> Result<Vec<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn insert(&self, _note: NewNote) -> Result<Note, DatabaseError> {
        Err(pool_timeout())
    }

    async fn update_by_id(&self, _id: Uuid, _changes: &NoteChanges) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Err(pool_timeout())
    }
}

/// Reads come from the wrapped store; writes behave as if a concurrent
/// request removed the note first
pub struct VanishingRepository {
    pub inner: MemoryNoteRepository,
}

#[async_trait]
impl NoteRepository for VanishingRepository {
    async fn find_by_user(&self, user: &str) -> Result<Vec<Note>, DatabaseError> {
        self.inner.find_by_user(user).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, note: NewNote) -> Result<Note, DatabaseError> {
        self.inner.insert(note).await
    }

    async fn update_by_id(&self, _id: Uuid, _changes: &NoteChanges) -> Result<Option<Note>, DatabaseError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<Option<Note>, DatabaseError> {
        Ok(None)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Token in the shape the notes frontend receives at login: `{ user: { id } }`
pub fn token_for(user_id: &str) -> String {
    token_signed_with(user_id, TEST_JWT_SECRET)
}

pub fn token_signed_with(user_id: &str, secret: &str) -> String {
    let claims = json!({ "user": { "id": user_id }, "iat": 1_700_000_000 });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .expect("failed to encode test JWT")
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("auth-token", token);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Create a note as `user` and return the response body
pub async fn add_note(app: &Router, user: &str, body: Value) -> Result<Value> {
    let token = token_for(user);
    let (status, note) = send(app, "POST", "/api/notes/addnote", Some(&token), Some(body)).await?;
    anyhow::ensure!(status == StatusCode::OK, "addnote failed with {}: {}", status, note);
    Ok(note)
}

pub async fn list_notes(app: &Router, user: &str) -> Result<Vec<Value>> {
    let token = token_for(user);
    let (status, body) = send(app, "GET", "/api/notes/fetchallnotes", Some(&token), None).await?;
    anyhow::ensure!(status == StatusCode::OK, "fetchallnotes failed with {}: {}", status, body);
    Ok(body.as_array().cloned().unwrap_or_default())
}
