//! In-memory note store.
//!
//! `NoteStore` owns the note collection and the selection state the UI binds
//! to. Callers either use the strict methods, which report missing notes as
//! [`Error::NotFound`], or [`NoteStore::dispatch`], which keeps the permissive
//! behavior of the UI: a command aimed at a missing note is logged and ignored.

mod command;

pub use command::{Dispatch, NoteCommand, NoteField};

use crate::clock::{Clock, SystemClock};
use crate::config::KeepConfig;
use crate::editor::NoteDraft;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteStatus};
use crate::sidebar::SidebarSelection;
use crate::util::{normalize_tag, push_unique};

/// Notes plus the selection state of the editor and sidebar
#[derive(Debug)]
pub struct NoteStore<C: Clock = SystemClock> {
    notes: Vec<Note>,
    selected_note_id: Option<NoteId>,
    is_editor_open: bool,
    tag_list: Vec<String>,
    selected_tag: SidebarSelection,
    untitled_title: String,
    clock: C,
}

impl NoteStore<SystemClock> {
    /// Create an empty store using the wall clock
    #[must_use]
    pub fn new(config: &KeepConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for NoteStore<SystemClock> {
    fn default() -> Self {
        Self::new(&KeepConfig::default())
    }
}

impl<C: Clock> NoteStore<C> {
    /// Create an empty store reading time from `clock`
    pub fn with_clock(config: &KeepConfig, clock: C) -> Self {
        let mut tag_list = Vec::with_capacity(config.default_tags.len());
        for tag in config.default_tags.iter().filter_map(|tag| require_tag(tag).ok()) {
            push_unique(&mut tag_list, tag);
        }

        Self {
            notes: Vec::new(),
            selected_note_id: None,
            is_editor_open: false,
            tag_list,
            selected_tag: SidebarSelection::Notes,
            untitled_title: config.untitled_title.clone(),
            clock,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    pub const fn selected_note_id(&self) -> Option<NoteId> {
        self.selected_note_id
    }

    /// The note bound to the editor, if any
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_note_id.and_then(|id| self.note(&id))
    }

    pub const fn is_editor_open(&self) -> bool {
        self.is_editor_open
    }

    /// Global tag catalog
    pub fn tag_list(&self) -> &[String] {
        &self.tag_list
    }

    pub const fn selected_tag(&self) -> &SidebarSelection {
        &self.selected_tag
    }

    /// Placeholder for blank titles
    pub fn untitled_title(&self) -> &str {
        &self.untitled_title
    }

    // ------------------------------------------------------------------
    // Note lifecycle
    // ------------------------------------------------------------------

    /// Append a blank note, select it, and open the editor
    pub fn create_note(&mut self) -> NoteId {
        let note = Note::new_at(self.clock.now_millis());
        let id = note.id;
        self.notes.push(note);
        self.selected_note_id = Some(id);
        self.is_editor_open = true;
        tracing::debug!("Created note {}", id);
        id
    }

    /// Append a note built from `draft`, registering its tags in the catalog
    pub fn insert_note(&mut self, draft: &NoteDraft) -> Result<NoteId> {
        let tags = normalize_tags(&draft.tags)?;
        let mut note = Note::new_at(self.clock.now_millis());
        draft.apply_to(&mut note);
        note.tags = tags;
        self.register_tags(&note.tags);

        let id = note.id;
        self.notes.push(note);
        tracing::debug!("Inserted note {} from draft", id);
        Ok(id)
    }

    /// Set a single field and refresh `updated_at`
    pub fn update_field(&mut self, id: &NoteId, field: NoteField) -> Result<&Note> {
        let field_name = field.name();
        match field {
            NoteField::Title(title) => self.edit(id, |note| note.title = title)?,
            NoteField::Content(content) => self.edit(id, |note| note.content = content)?,
            NoteField::Priority(priority) => self.edit(id, |note| note.priority = priority)?,
            NoteField::BackgroundColor(color) => {
                self.edit(id, |note| note.background_color = color)?;
            }
            NoteField::Pinned(pinned) => self.edit(id, |note| note.is_pinned = pinned)?,
            NoteField::Tags(tags) => {
                let tags = normalize_tags(&tags)?;
                self.edit(id, |note| note.tags.clone_from(&tags))?;
                self.register_tags(&tags);
            }
            NoteField::Status(status) => self.set_status(id, status)?,
        }
        tracing::trace!("Updated {} of note {}", field_name, id);
        self.note(id).ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Overwrite every editable field from `draft`
    pub fn update_note(&mut self, id: &NoteId, draft: &NoteDraft) -> Result<&Note> {
        let tags = normalize_tags(&draft.tags)?;
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        draft.apply_to(note);
        note.tags.clone_from(&tags);
        note.touch(now);
        self.register_tags(&tags);
        self.note(id).ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Remove a note permanently
    pub fn delete_note(&mut self, id: &NoteId) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == *id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let note = self.notes.remove(index);
        self.release_selection(id);
        tracing::debug!("Deleted note {}", id);
        Ok(note)
    }

    /// Move a note to the trash
    pub fn trash_note(&mut self, id: &NoteId) -> Result<()> {
        self.set_status(id, NoteStatus::Trash)
    }

    /// Move a note to the archive
    pub fn archive_note(&mut self, id: &NoteId) -> Result<()> {
        self.set_status(id, NoteStatus::Archived)
    }

    /// Bring an archived or trashed note back to the main list
    pub fn restore_note(&mut self, id: &NoteId) -> Result<()> {
        self.set_status(id, NoteStatus::Active)
    }

    /// Permanently delete every trashed note, returning how many were removed
    pub fn empty_trash(&mut self) -> usize {
        let trashed: Vec<NoteId> = self
            .notes
            .iter()
            .filter(|note| note.status == NoteStatus::Trash)
            .map(|note| note.id)
            .collect();

        self.notes.retain(|note| note.status != NoteStatus::Trash);
        for id in &trashed {
            self.release_selection(id);
        }
        tracing::debug!("Emptied trash ({} notes)", trashed.len());
        trashed.len()
    }

    /// Flip the pin flag, returning the new value
    pub fn toggle_pin(&mut self, id: &NoteId) -> Result<bool> {
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        note.is_pinned = !note.is_pinned;
        note.touch(now);
        Ok(note.is_pinned)
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    /// Add `tag` to a note and to the catalog; adding twice is a no-op
    pub fn add_tag(&mut self, id: &NoteId, tag: &str) -> Result<()> {
        let tag = require_tag(tag)?;
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        if push_unique(&mut note.tags, tag.clone()) {
            note.touch(now);
        }
        push_unique(&mut self.tag_list, tag);
        Ok(())
    }

    /// Remove `tag` from a note, returning whether it was present
    pub fn remove_tag(&mut self, id: &NoteId, tag: &str) -> Result<bool> {
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        let before = note.tags.len();
        note.tags.retain(|t| t != tag.trim());
        let removed = note.tags.len() != before;
        if removed {
            note.touch(now);
        }
        Ok(removed)
    }

    /// Add `tag` to the catalog, returning whether it was new
    pub fn add_catalog_tag(&mut self, tag: &str) -> Result<bool> {
        let tag = require_tag(tag)?;
        Ok(push_unique(&mut self.tag_list, tag))
    }

    /// Remove `tag` from the catalog; notes keep their copy of the tag
    pub fn remove_catalog_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tag_list.len();
        self.tag_list.retain(|t| t != tag);
        if self.selected_tag == SidebarSelection::Tag(tag.to_string()) {
            self.selected_tag = SidebarSelection::Notes;
        }
        self.tag_list.len() != before
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Open the editor on `id`, or on a new note when `None`
    pub fn open_editor(&mut self, id: Option<NoteId>) -> Result<()> {
        self.select_note(id)?;
        self.is_editor_open = true;
        Ok(())
    }

    /// Close the editor and clear the selection
    pub fn close_editor(&mut self) {
        self.is_editor_open = false;
        self.selected_note_id = None;
    }

    /// Change the selected note without touching the editor flag
    pub fn select_note(&mut self, id: Option<NoteId>) -> Result<()> {
        if let Some(id) = id {
            if self.note(&id).is_none() {
                return Err(Error::NotFound(id.to_string()));
            }
        }
        self.selected_note_id = id;
        Ok(())
    }

    /// Change the sidebar filter
    pub fn set_selected_tag(&mut self, selection: SidebarSelection) {
        self.selected_tag = selection;
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Apply `command`, logging and ignoring commands that cannot apply
    pub fn dispatch(&mut self, command: NoteCommand) -> Dispatch {
        let result = match command {
            NoteCommand::CreateNote => Ok(Dispatch::Created(self.create_note())),
            NoteCommand::InsertNote(draft) => self.insert_note(&draft).map(Dispatch::Created),
            NoteCommand::UpdateField { id, field } => {
                self.update_field(&id, field).map(|_| Dispatch::Applied)
            }
            NoteCommand::UpdateNote { id, draft } => {
                self.update_note(&id, &draft).map(|_| Dispatch::Applied)
            }
            NoteCommand::DeleteNote(id) => self.delete_note(&id).map(|_| Dispatch::Applied),
            NoteCommand::TrashNote(id) => self.trash_note(&id).map(|()| Dispatch::Applied),
            NoteCommand::ArchiveNote(id) => self.archive_note(&id).map(|()| Dispatch::Applied),
            NoteCommand::RestoreNote(id) => self.restore_note(&id).map(|()| Dispatch::Applied),
            NoteCommand::EmptyTrash => {
                self.empty_trash();
                Ok(Dispatch::Applied)
            }
            NoteCommand::TogglePin(id) => self.toggle_pin(&id).map(|_| Dispatch::Applied),
            NoteCommand::AddTag { id, tag } => self.add_tag(&id, &tag).map(|()| Dispatch::Applied),
            NoteCommand::RemoveTag { id, tag } => {
                self.remove_tag(&id, &tag).map(|_| Dispatch::Applied)
            }
            NoteCommand::AddCatalogTag(tag) => {
                self.add_catalog_tag(&tag).map(|_| Dispatch::Applied)
            }
            NoteCommand::RemoveCatalogTag(tag) => {
                self.remove_catalog_tag(&tag);
                Ok(Dispatch::Applied)
            }
            NoteCommand::OpenEditor(id) => self.open_editor(id).map(|()| Dispatch::Applied),
            NoteCommand::CloseEditor => {
                self.close_editor();
                Ok(Dispatch::Applied)
            }
            NoteCommand::SelectNote(id) => self.select_note(id).map(|()| Dispatch::Applied),
            NoteCommand::SetSelectedTag(selection) => {
                self.set_selected_tag(selection);
                Ok(Dispatch::Applied)
            }
        };

        result.unwrap_or_else(|error| {
            tracing::warn!("Ignoring note command: {}", error);
            Dispatch::Ignored(error.to_string())
        })
    }

    // ------------------------------------------------------------------
    // Private
    // ------------------------------------------------------------------

    fn note_mut(&mut self, id: &NoteId) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.id == *id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Run `change` on a note and stamp it
    fn edit(&mut self, id: &NoteId, change: impl FnOnce(&mut Note)) -> Result<()> {
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        change(note);
        note.touch(now);
        Ok(())
    }

    fn set_status(&mut self, id: &NoteId, status: NoteStatus) -> Result<()> {
        let now = self.clock.now_millis();
        let note = self.note_mut(id)?;
        if note.status != status {
            note.status = status;
            note.touch(now);
        }
        if status != NoteStatus::Active {
            self.release_selection(id);
        }
        tracing::debug!("Note {} is now {}", id, status);
        Ok(())
    }

    /// Clear the selection and close the editor when `id` is selected
    fn release_selection(&mut self, id: &NoteId) {
        if self.selected_note_id == Some(*id) {
            self.selected_note_id = None;
            self.is_editor_open = false;
        }
    }

    fn register_tags(&mut self, tags: &[String]) {
        for tag in tags {
            push_unique(&mut self.tag_list, tag.clone());
        }
    }
}

fn require_tag(tag: &str) -> Result<String> {
    let tag =
        normalize_tag(tag).ok_or_else(|| Error::InvalidInput("Tag cannot be empty".to_string()))?;
    if SidebarSelection::is_reserved_label(&tag) {
        return Err(Error::InvalidInput(format!(
            "'{tag}' is reserved for a sidebar entry"
        )));
    }
    Ok(tag)
}

fn normalize_tags(tags: &[String]) -> Result<Vec<String>> {
    let mut normalized = Vec::with_capacity(tags.len());
    for tag in tags {
        push_unique(&mut normalized, require_tag(tag)?);
    }
    Ok(normalized)
}
