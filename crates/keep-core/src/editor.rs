//! Editor binding: turns editor events into store commands.
//!
//! The editor works on a [`NoteDraft`]. In live mode every event is forwarded
//! to the store as it happens ([`EditorBinding::handle`]); in batched mode the
//! events only touch the draft and [`EditorBinding::save`] writes the whole
//! snapshot at once, creating the note when the editor was opened without one.
//!
//! Rich-text formatting is done by the host editing surface. The binding only
//! sees the resulting markup through [`EditorEvent::ContentChanged`].

use crate::clock::Clock;
use crate::error::Result;
use crate::models::{BackgroundColor, Note, NoteId, Priority};
use crate::store::{Dispatch, NoteCommand, NoteField, NoteStore};
use crate::util::{normalize_tag, push_unique};

/// Editable fields of a note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub priority: Priority,
    pub background_color: BackgroundColor,
    pub is_pinned: bool,
}

impl NoteDraft {
    /// Snapshot the editable fields of `note`
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            priority: note.priority,
            background_color: note.background_color,
            is_pinned: note.is_pinned,
        }
    }

    /// Copy the draft onto `note`; timestamps and status are left alone
    pub fn apply_to(&self, note: &mut Note) {
        note.title.clone_from(&self.title);
        note.content.clone_from(&self.content);
        note.tags.clone_from(&self.tags);
        note.priority = self.priority;
        note.background_color = self.background_color;
        note.is_pinned = self.is_pinned;
    }
}

/// A discrete change made in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    TitleChanged(String),
    /// Markup read back from the rich-text surface
    ContentChanged(String),
    PriorityChanged(Priority),
    BackgroundChanged(BackgroundColor),
    TagAdded(String),
    TagRemoved(String),
    PinToggled,
}

/// Draft state for the note open in the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBinding {
    target: Option<NoteId>,
    draft: NoteDraft,
}

impl EditorBinding {
    /// Bind to the store's selected note, or start a blank draft
    pub fn open<C: Clock>(store: &NoteStore<C>) -> Self {
        store.selected_note().map_or_else(Self::blank, Self::for_note)
    }

    /// Bind to an existing note
    #[must_use]
    pub fn for_note(note: &Note) -> Self {
        Self {
            target: Some(note.id),
            draft: NoteDraft::from_note(note),
        }
    }

    /// Start a draft for a note that does not exist yet
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Note the draft will be saved to, `None` in create mode
    pub const fn target(&self) -> Option<NoteId> {
        self.target
    }

    pub const fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Check whether saving would create a new note
    pub const fn is_new(&self) -> bool {
        self.target.is_none()
    }

    /// Check whether the draft differs from the stored note
    pub fn is_dirty<C: Clock>(&self, store: &NoteStore<C>) -> bool {
        match self.target.and_then(|id| store.note(&id)) {
            Some(note) => NoteDraft::from_note(note) != self.draft,
            None => self.draft != NoteDraft::default(),
        }
    }

    /// Apply `event` to the draft only
    pub fn apply(&mut self, event: &EditorEvent) {
        let draft = &mut self.draft;
        match event {
            EditorEvent::TitleChanged(title) => draft.title.clone_from(title),
            EditorEvent::ContentChanged(content) => draft.content.clone_from(content),
            EditorEvent::PriorityChanged(priority) => draft.priority = *priority,
            EditorEvent::BackgroundChanged(color) => draft.background_color = *color,
            EditorEvent::TagAdded(tag) => {
                if let Some(tag) = normalize_tag(tag) {
                    push_unique(&mut draft.tags, tag);
                }
            }
            EditorEvent::TagRemoved(tag) => draft.tags.retain(|t| t != tag.trim()),
            EditorEvent::PinToggled => draft.is_pinned = !draft.is_pinned,
        }
    }

    /// Store command equivalent to `event`, or `None` in create mode
    #[must_use]
    pub fn to_command(&self, event: &EditorEvent) -> Option<NoteCommand> {
        let id = self.target?;
        let command = match event {
            EditorEvent::TitleChanged(title) => NoteCommand::UpdateField {
                id,
                field: NoteField::Title(title.clone()),
            },
            EditorEvent::ContentChanged(content) => NoteCommand::UpdateField {
                id,
                field: NoteField::Content(content.clone()),
            },
            EditorEvent::PriorityChanged(priority) => NoteCommand::UpdateField {
                id,
                field: NoteField::Priority(*priority),
            },
            EditorEvent::BackgroundChanged(color) => NoteCommand::UpdateField {
                id,
                field: NoteField::BackgroundColor(*color),
            },
            EditorEvent::TagAdded(tag) => NoteCommand::AddTag {
                id,
                tag: tag.clone(),
            },
            EditorEvent::TagRemoved(tag) => NoteCommand::RemoveTag {
                id,
                tag: tag.clone(),
            },
            EditorEvent::PinToggled => NoteCommand::TogglePin(id),
        };
        Some(command)
    }

    /// Live mode: update the draft and forward the change to the store.
    ///
    /// Returns `None` when the editor has no note yet; the change stays in
    /// the draft until [`save`](Self::save).
    pub fn handle<C: Clock>(
        &mut self,
        store: &mut NoteStore<C>,
        event: EditorEvent,
    ) -> Option<Dispatch> {
        self.apply(&event);
        let command = self.to_command(&event)?;
        Some(store.dispatch(command))
    }

    /// Batched mode: write the draft, creating the note in create mode.
    ///
    /// A newly created note is selected and the binding switches to it.
    pub fn save<C: Clock>(&mut self, store: &mut NoteStore<C>) -> Result<NoteId> {
        if let Some(id) = self.target {
            store.update_note(&id, &self.draft)?;
            tracing::debug!("Saved editor draft to note {}", id);
            return Ok(id);
        }

        let id = store.insert_note(&self.draft)?;
        store.open_editor(Some(id))?;
        self.target = Some(id);
        tracing::debug!("Created note {} from editor draft", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::KeepConfig;
    use pretty_assertions::assert_eq;

    fn store(clock: &ManualClock) -> NoteStore<&ManualClock> {
        NoteStore::with_clock(&KeepConfig::default(), clock)
    }

    #[test]
    fn open_without_selection_starts_blank() {
        let clock = ManualClock::new(0);
        let store = store(&clock);

        let binding = EditorBinding::open(&store);
        assert!(binding.is_new());
        assert_eq!(binding.draft(), &NoteDraft::default());
    }

    #[test]
    fn open_loads_selected_note() {
        let clock = ManualClock::new(0);
        let mut store = store(&clock);
        let id = store.create_note();
        store
            .update_field(&id, NoteField::Title("Plan".to_string()))
            .unwrap();

        let binding = EditorBinding::open(&store);
        assert_eq!(binding.target(), Some(id));
        assert_eq!(binding.draft().title, "Plan");
        assert!(!binding.is_dirty(&store));
    }

    #[test]
    fn live_events_update_store_immediately() {
        let clock = ManualClock::new(0);
        let mut store = store(&clock);
        let id = store.create_note();
        let mut binding = EditorBinding::open(&store);

        clock.advance(5);
        let outcome = binding.handle(
            &mut store,
            EditorEvent::ContentChanged("<b>hi</b>".to_string()),
        );
        binding.handle(&mut store, EditorEvent::PriorityChanged(Priority::High));
        binding.handle(&mut store, EditorEvent::TagAdded(" Quotes ".to_string()));

        assert_eq!(outcome, Some(Dispatch::Applied));
        let note = store.note(&id).unwrap();
        assert_eq!(note.content, "<b>hi</b>");
        assert_eq!(note.priority, Priority::High);
        assert_eq!(note.tags, vec!["Quotes"]);
        assert_eq!(note.updated_at, 5);
        assert!(!binding.is_dirty(&store));
    }

    #[test]
    fn events_without_target_stay_in_draft() {
        let clock = ManualClock::new(0);
        let mut store = store(&clock);
        let mut binding = EditorBinding::blank();

        let outcome = binding.handle(&mut store, EditorEvent::TitleChanged("Draft".to_string()));

        assert_eq!(outcome, None);
        assert!(store.notes().is_empty());
        assert_eq!(binding.draft().title, "Draft");
        assert!(binding.is_dirty(&store));
    }

    #[test]
    fn save_in_create_mode_inserts_once_and_binds() {
        let clock = ManualClock::new(0);
        let mut store = store(&clock);
        let mut binding = EditorBinding::blank();
        binding.apply(&EditorEvent::TitleChanged("Workout".to_string()));
        binding.apply(&EditorEvent::TagAdded("Fitness".to_string()));
        binding.apply(&EditorEvent::BackgroundChanged(BackgroundColor::Green));

        let id = binding.save(&mut store).unwrap();
        assert_eq!(store.notes().len(), 1);
        assert_eq!(binding.target(), Some(id));
        assert_eq!(store.selected_note_id(), Some(id));
        assert!(store.is_editor_open());
        assert!(store.tag_list().contains(&"Fitness".to_string()));

        binding.apply(&EditorEvent::TitleChanged("Leg day".to_string()));
        assert_eq!(binding.save(&mut store).unwrap(), id);
        assert_eq!(store.notes().len(), 1);

        let note = store.note(&id).unwrap();
        assert_eq!(note.title, "Leg day");
        assert_eq!(note.background_color, BackgroundColor::Green);
    }

    #[test]
    fn save_to_deleted_note_fails() {
        let clock = ManualClock::new(0);
        let mut store = store(&clock);
        let id = store.create_note();
        let mut binding = EditorBinding::open(&store);
        store.delete_note(&id).unwrap();

        assert!(binding.save(&mut store).is_err());
    }

    #[test]
    fn apply_ignores_blank_and_duplicate_tags() {
        let mut binding = EditorBinding::blank();
        binding.apply(&EditorEvent::TagAdded("Coding".to_string()));
        binding.apply(&EditorEvent::TagAdded("Coding".to_string()));
        binding.apply(&EditorEvent::TagAdded("   ".to_string()));
        assert_eq!(binding.draft().tags, vec!["Coding"]);

        binding.apply(&EditorEvent::TagRemoved("Coding".to_string()));
        assert!(binding.draft().tags.is_empty());
    }

    #[test]
    fn to_command_maps_pin_toggle() {
        let note = Note::new_at(0);
        let binding = EditorBinding::for_note(&note);
        assert_eq!(
            binding.to_command(&EditorEvent::PinToggled),
            Some(NoteCommand::TogglePin(note.id))
        );
    }
}
