//! Note list component

use dioxus::prelude::*;

use keep_core::models::Note;
use keep_core::sidebar::SidebarSelection;
use keep_core::{NoteCommand, NoteId};

use super::NoteCard;
use crate::state::AppState;

/// Grid of notes, pinned group first
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let groups = state.visible_notes();
    let selection = state.store.read().selected_tag().clone();
    let current_id = state.store.read().selected_note_id();
    let colors = (state.theme)().palette();
    let show_pinned_heading = !groups.pinned.is_empty();
    let unpinned_heading = if show_pinned_heading {
        "Others"
    } else {
        "All Notes"
    };

    rsx! {
        div {
            class: "note-list",
            style: "
                flex: 1;
                overflow-y: auto;
                padding: 16px;
                background: {colors.bg_primary};
            ",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0; font-size: 18px;", "{selection}" }

                if selection == SidebarSelection::Trash {
                    button {
                        style: "
                            padding: 6px 12px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: transparent;
                            color: {colors.error};
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            state.dispatch(NoteCommand::EmptyTrash);
                        },
                        "Empty Trash"
                    }
                } else {
                    button {
                        title: "New note",
                        style: "
                            width: 32px;
                            height: 32px;
                            border: none;
                            border-radius: 16px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            font-size: 18px;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            state.dispatch(NoteCommand::OpenEditor(None));
                        },
                        "+"
                    }
                }
            }

            if groups.is_empty() {
                div {
                    style: "
                        padding: 20px;
                        text-align: center;
                        color: {colors.text_muted};
                    ",
                    "No notes"
                }
            } else {
                if show_pinned_heading {
                    NoteGroup {
                        heading: "Pinned Notes",
                        notes: groups.pinned,
                        current_id,
                    }
                }
                if !groups.unpinned.is_empty() {
                    NoteGroup {
                        heading: unpinned_heading.to_string(),
                        notes: groups.unpinned,
                        current_id,
                    }
                }
            }
        }
    }
}

/// Titled group of note cards
#[component]
fn NoteGroup(heading: String, notes: Vec<Note>, current_id: Option<NoteId>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let count = notes.len();

    rsx! {
        section {
            style: "margin-bottom: 20px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 12px; letter-spacing: 0.05em; color: {colors.text_muted};",
                "{heading} ({count})"
            }
            div {
                class: "notes-grid",
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-start;",
                for note in notes {
                    {
                        let note_id = note.id;
                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                is_selected: current_id == Some(note_id),
                                note,
                            }
                        }
                    }
                }
            }
        }
    }
}
