pub mod add;
pub mod delete;
pub mod fetch_all;
pub mod update;

pub use add::add_note;
pub use delete::delete_note;
pub use fetch_all::fetch_all_notes;
pub use update::update_note;
