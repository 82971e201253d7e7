//! Data models for Keep

mod attributes;
mod note;

pub use attributes::{BackgroundColor, NoteStatus, Priority};
pub use note::{Note, NoteId, DEFAULT_UNTITLED_TITLE};
