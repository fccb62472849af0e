// handlers/protected/mod.rs - Protected handlers (caller token required)
//
// Route Prefix: /api/notes/*
// Middleware: fetch_user resolves the token into an AuthUser extension before
// any handler here runs, so handlers can rely on Extension<AuthUser>.

pub mod notes;

pub use notes::*;
