pub mod note_service;
pub mod validation;

pub use note_service::{CreateNote, NoteError, NoteService, UpdateNote};
pub use validation::FieldError;
