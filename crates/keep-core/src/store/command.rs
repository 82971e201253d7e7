//! Commands accepted by [`NoteStore::dispatch`](super::NoteStore::dispatch).

use crate::editor::NoteDraft;
use crate::models::{BackgroundColor, NoteId, NoteStatus, Priority};
use crate::sidebar::SidebarSelection;

/// A single editable note field with its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteField {
    Title(String),
    Content(String),
    Priority(Priority),
    BackgroundColor(BackgroundColor),
    /// Replaces the whole tag set
    Tags(Vec<String>),
    Pinned(bool),
    Status(NoteStatus),
}

impl NoteField {
    /// Field name for log messages
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Content(_) => "content",
            Self::Priority(_) => "priority",
            Self::BackgroundColor(_) => "background_color",
            Self::Tags(_) => "tags",
            Self::Pinned(_) => "is_pinned",
            Self::Status(_) => "status",
        }
    }
}

/// Store mutation requested by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    /// Append a blank note and open it in the editor
    CreateNote,
    /// Append a note built from an editor draft
    InsertNote(NoteDraft),
    UpdateField { id: NoteId, field: NoteField },
    /// Overwrite every editable field from an editor draft
    UpdateNote { id: NoteId, draft: NoteDraft },
    /// Remove permanently
    DeleteNote(NoteId),
    TrashNote(NoteId),
    ArchiveNote(NoteId),
    RestoreNote(NoteId),
    EmptyTrash,
    TogglePin(NoteId),
    AddTag { id: NoteId, tag: String },
    RemoveTag { id: NoteId, tag: String },
    AddCatalogTag(String),
    RemoveCatalogTag(String),
    /// `None` opens the editor for a new note
    OpenEditor(Option<NoteId>),
    CloseEditor,
    SelectNote(Option<NoteId>),
    SetSelectedTag(SidebarSelection),
}

/// Outcome of a dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Created(NoteId),
    /// The command referred to a missing note or carried invalid input and
    /// left the store untouched
    Ignored(String),
}

impl Dispatch {
    /// Check whether the command changed the store
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}
