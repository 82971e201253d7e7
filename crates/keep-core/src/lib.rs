//! keep-core - Core library for Keep
//!
//! This crate contains the note models, the in-memory note store, and the pure
//! projections (note list, sidebar, editor draft) the desktop shell renders.

pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod sidebar;
pub mod store;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use store::{Dispatch, NoteCommand, NoteStore};
