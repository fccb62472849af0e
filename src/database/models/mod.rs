pub mod note;

pub use note::{Note, NewNote, NoteChanges, DEFAULT_TAG};
