//! Home view - main application screen

use dioxus::prelude::*;

use keep_core::sidebar::SidebarSelection;

use crate::components::{NoteEditor, NoteList, SearchBar, Sidebar, SortMenu, TagManager};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let editing_tags = *state.store.read().selected_tag() == SidebarSelection::EditTags;
    let editor_open = state.store.read().is_editor_open();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            Sidebar {}

            div {
                class: "main-content",
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                SearchBar {}

                div {
                    class: "content-area",
                    style: "flex: 1; display: flex; overflow: hidden;",

                    if editing_tags {
                        TagManager {}
                    }
                    NoteList {}
                    if editor_open {
                        NoteEditor {}
                    }
                }
            }

            if (state.sort_menu_open)() {
                SortMenu {}
            }
        }
    }
}
