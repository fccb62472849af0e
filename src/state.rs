use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::TokenAuthority;
use crate::database::NoteRepository;
use crate::services::NoteService;

/// Shared handles every request can reach. The repository inside `notes` is
/// created and closed by process bootstrap.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteService,
    pub auth: TokenAuthority,
}

impl AppState {
    pub fn new(repo: Arc<dyn NoteRepository>, auth: TokenAuthority) -> Self {
        Self {
            notes: NoteService::new(repo),
            auth,
        }
    }
}

impl FromRef<AppState> for NoteService {
    fn from_ref(state: &AppState) -> Self {
        state.notes.clone()
    }
}

impl FromRef<AppState> for TokenAuthority {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
