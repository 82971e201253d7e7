//! Note card component

use dioxus::prelude::*;

use keep_core::models::{Note, NoteStatus};
use keep_core::NoteCommand;

use crate::state::AppState;

/// Characters of content shown on a card
const PREVIEW_CHARS: usize = 140;

/// A single note rendered in the note grid.
#[component]
pub fn NoteCard(note: Note, is_selected: bool) -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let colors = theme.palette();

    let note_id = note.id;
    let title = note
        .display_title(state.store.read().untitled_title())
        .to_string();
    let preview = note.text_preview(PREVIEW_CHARS);
    let priority = note.priority;
    let updated = format_timestamp(note.updated_at);
    let bg = theme.note_background(note.background_color);
    let border = if is_selected {
        colors.accent
    } else {
        colors.border
    };
    let pin_opacity = if note.is_pinned { "1" } else { "0.35" };

    rsx! {
        div {
            class: if is_selected { "note-card selected" } else { "note-card" },
            style: "
                width: 240px;
                padding: 12px 14px;
                border: 1px solid {border};
                border-radius: 8px;
                background: {bg};
                cursor: pointer;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",
            onclick: move |_| {
                state.dispatch(NoteCommand::OpenEditor(Some(note_id)));
            },

            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                span {
                    class: "note-title",
                    style: "font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{title}"
                }
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    span {
                        style: "font-size: 11px; color: {colors.text_secondary};",
                        "{priority}"
                    }
                    button {
                        title: "Pin",
                        style: "border: none; background: transparent; cursor: pointer; opacity: {pin_opacity};",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            state.dispatch(NoteCommand::TogglePin(note_id));
                        },
                        "📌"
                    }
                }
            }

            if !preview.is_empty() {
                div {
                    class: "note-preview",
                    style: "font-size: 13px; color: {colors.text_secondary}; line-height: 1.4;",
                    "{preview}"
                }
            }

            if !note.tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px;",
                    for tag in note.tags.iter() {
                        span {
                            key: "{tag}",
                            style: "
                                font-size: 11px;
                                padding: 2px 8px;
                                border-radius: 10px;
                                background: {colors.bg_tertiary};
                                color: {colors.text_secondary};
                            ",
                            "{tag}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span {
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "{updated}"
                }
                CardActions { note_id, status: note.status }
            }
        }
    }
}

/// Status-dependent action buttons
#[component]
fn CardActions(note_id: keep_core::NoteId, status: NoteStatus) -> Element {
    let mut state = use_context::<AppState>();

    let mut run = move |evt: MouseEvent, command: NoteCommand| {
        evt.stop_propagation();
        state.dispatch(command);
    };

    rsx! {
        div {
            style: "display: flex; gap: 4px;",
            {match status {
                NoteStatus::Active => rsx! {
                    ActionButton {
                        title: "Edit",
                        onclick: move |evt| run(evt, NoteCommand::OpenEditor(Some(note_id))),
                        "✏️"
                    }
                    ActionButton {
                        title: "Archive",
                        onclick: move |evt| run(evt, NoteCommand::ArchiveNote(note_id)),
                        "📦"
                    }
                    ActionButton {
                        title: "Move to trash",
                        onclick: move |evt| run(evt, NoteCommand::TrashNote(note_id)),
                        "🗑️"
                    }
                },
                NoteStatus::Archived => rsx! {
                    ActionButton {
                        title: "Unarchive",
                        onclick: move |evt| run(evt, NoteCommand::RestoreNote(note_id)),
                        "📤"
                    }
                    ActionButton {
                        title: "Move to trash",
                        onclick: move |evt| run(evt, NoteCommand::TrashNote(note_id)),
                        "🗑️"
                    }
                },
                NoteStatus::Trash => rsx! {
                    ActionButton {
                        title: "Restore",
                        onclick: move |evt| run(evt, NoteCommand::RestoreNote(note_id)),
                        "♻️"
                    }
                    ActionButton {
                        title: "Delete forever",
                        onclick: move |evt| run(evt, NoteCommand::DeleteNote(note_id)),
                        "❌"
                    }
                },
            }}
        }
    }
}

/// Small borderless icon button
#[component]
fn ActionButton(title: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            title: "{title}",
            style: "border: none; background: transparent; cursor: pointer; padding: 2px;",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Render a Unix millisecond timestamp in local time
fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis).map_or_else(String::new, |time| {
        time.with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis() {
        let formatted = format_timestamp(1_700_000_000_000);
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }
}
