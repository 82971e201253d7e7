//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use keep_core::models::Note;
use keep_core::view::{project, NoteQuery, SortMode};
use keep_core::{Dispatch, NoteCommand, NoteStore};

use crate::theme::ResolvedTheme;

/// Notes projected for the list, owned so components can move them into rsx
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteGroups {
    pub pinned: Vec<Note>,
    pub unpinned: Vec<Note>,
}

impl NoteGroups {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.unpinned.is_empty()
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The note store, sole source of truth
    pub store: Signal<NoteStore>,
    /// Current search query
    pub search_query: Signal<String>,
    /// Current list ordering
    pub sort_mode: Signal<SortMode>,
    /// Whether the sort menu is open
    pub sort_menu_open: Signal<bool>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Apply a command to the store
    pub fn dispatch(&mut self, command: NoteCommand) -> Dispatch {
        self.store.write().dispatch(command)
    }

    /// Query built from the search box, sort menu, and sidebar selection
    #[must_use]
    pub fn query(&self) -> NoteQuery {
        NoteQuery {
            search: (self.search_query)(),
            sort: (self.sort_mode)(),
            selection: self.store.read().selected_tag().clone(),
        }
    }

    /// Filtered, sorted and grouped notes for the list
    #[must_use]
    pub fn visible_notes(&self) -> NoteGroups {
        let query = self.query();
        let store = self.store.read();
        let view = project(store.notes(), &query);
        NoteGroups {
            pinned: view.pinned.into_iter().cloned().collect(),
            unpinned: view.unpinned.into_iter().cloned().collect(),
        }
    }
}
