//! Note editor component

use dioxus::prelude::*;

use keep_core::editor::{EditorBinding, EditorEvent};
use keep_core::models::{BackgroundColor, Priority};
use keep_core::{Dispatch, NoteCommand};

use super::format_toolbar::{eval_markup, read_markup_script, write_markup_script, CONTENT_ELEMENT_ID};
use super::FormatToolbar;
use crate::state::AppState;

/// Rich-text note editor.
///
/// Changes to an existing note are written to the store as they happen. A
/// note opened with the "+" button lives in a draft until "Create" is pressed.
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut binding = use_signal(EditorBinding::blank);
    let mut loaded = use_signal(|| false);
    let mut tag_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Rebind when the selected note changes
    use_effect(move || {
        let selected = state.store.read().selected_note_id();
        if loaded() && selected == binding.peek().target() {
            return;
        }

        let next = EditorBinding::open(&*state.store.read());
        let markup = next.draft().content.clone();
        binding.set(next);
        loaded.set(true);
        error.set(None);

        spawn(async move {
            if let Some(script) = write_markup_script(&markup) {
                if let Err(e) = document::eval(&script).await {
                    tracing::warn!("Failed to load note into editor: {:?}", e);
                }
            }
        });
    });

    let mut send = move |event: EditorEvent| {
        let mut store = state.store;
        let outcome = binding.write().handle(&mut *store.write(), event);
        if let Some(Dispatch::Ignored(reason)) = outcome {
            error.set(Some(reason));
        }
    };

    let on_content_input = move |_| {
        spawn(async move {
            if let Some(markup) = eval_markup(&read_markup_script()).await {
                send(EditorEvent::ContentChanged(markup));
            }
        });
    };

    let mut add_tag = move || {
        let tag = tag_input();
        if tag.trim().is_empty() {
            return;
        }
        send(EditorEvent::TagAdded(tag));
        tag_input.set(String::new());
    };

    let create_note = move |_| {
        let mut store = state.store;
        let result = binding.write().save(&mut *store.write());
        match result {
            Ok(id) => {
                tracing::info!("Created note {} from editor", id);
                error.set(None);
            }
            Err(e) => {
                tracing::error!("Failed to create note: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let draft = binding.read().draft().clone();
    let is_new = binding.read().is_new();
    let catalog = state.store.read().tag_list().to_vec();
    let card_bg = (state.theme)().note_background(draft.background_color);
    let pin_label = if draft.is_pinned { "Unpin" } else { "Pin" };

    rsx! {
        div {
            class: "note-editor",
            style: "
                width: 420px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border-left: 1px solid {colors.border};
                background: {card_bg};
            ",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 {
                    style: "margin: 0;",
                    if is_new { "New note" } else { "Edit note" }
                }
                button {
                    title: "Close editor",
                    style: "border: none; background: transparent; font-size: 18px; cursor: pointer; color: {colors.text_secondary};",
                    onclick: move |_| {
                        state.dispatch(NoteCommand::CloseEditor);
                    },
                    "×"
                }
            }

            if let Some(message) = error() {
                div {
                    style: "color: {colors.error}; font-size: 12px;",
                    "{message}"
                }
            }

            input {
                r#type: "text",
                class: "note-title-input",
                placeholder: "Title...",
                value: "{draft.title}",
                oninput: move |evt| send(EditorEvent::TitleChanged(evt.value())),
                style: "
                    padding: 8px 0;
                    border: none;
                    border-bottom: 1px solid {colors.border};
                    font-size: 16px;
                    font-weight: 600;
                    background: transparent;
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            FormatToolbar {
                on_change: move |markup| send(EditorEvent::ContentChanged(markup)),
            }

            div {
                id: CONTENT_ELEMENT_ID,
                class: "note-content",
                contenteditable: "true",
                oninput: on_content_input,
                style: "
                    flex: 1;
                    min-height: 160px;
                    overflow-y: auto;
                    padding: 8px 0;
                    line-height: 1.6;
                    outline: none;
                    color: {colors.text_primary};
                ",
            }

            div {
                class: "note-tags",
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                for tag in draft.tags.clone() {
                    {
                        let removed = tag.clone();
                        rsx! {
                            span {
                                key: "{tag}",
                                style: "
                                    font-size: 12px;
                                    padding: 2px 8px;
                                    border-radius: 10px;
                                    background: {colors.bg_tertiary};
                                    color: {colors.text_secondary};
                                ",
                                "{tag} "
                                button {
                                    title: "Remove tag",
                                    style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                                    onclick: move |_| send(EditorEvent::TagRemoved(removed.clone())),
                                    "×"
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 6px;",
                input {
                    r#type: "text",
                    list: "keep-tag-catalog",
                    placeholder: "Add a tag",
                    value: "{tag_input}",
                    oninput: move |evt| tag_input.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            add_tag();
                        }
                    },
                    style: "
                        flex: 1;
                        padding: 6px 8px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                }
                datalist {
                    id: "keep-tag-catalog",
                    for tag in catalog {
                        option { key: "{tag}", value: "{tag}" }
                    }
                }
                button {
                    style: "padding: 6px 10px; border: 1px solid {colors.border}; border-radius: 6px; background: {colors.bg_primary}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| add_tag(),
                    "Add Tag"
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                label {
                    "Background: "
                    select {
                        value: "{draft.background_color}",
                        onchange: move |evt| {
                            match evt.value().parse::<BackgroundColor>() {
                                Ok(color) => send(EditorEvent::BackgroundChanged(color)),
                                Err(e) => tracing::warn!("{}", e),
                            }
                        },
                        for color in BackgroundColor::ALL {
                            option {
                                key: "{color}",
                                value: "{color}",
                                selected: color == draft.background_color,
                                "{color}"
                            }
                        }
                    }
                }
                label {
                    "Priority: "
                    select {
                        value: "{draft.priority}",
                        onchange: move |evt| {
                            match evt.value().parse::<Priority>() {
                                Ok(priority) => send(EditorEvent::PriorityChanged(priority)),
                                Err(e) => tracing::warn!("{}", e),
                            }
                        },
                        for priority in Priority::ALL {
                            option {
                                key: "{priority}",
                                value: "{priority}",
                                selected: priority == draft.priority,
                                "{priority}"
                            }
                        }
                    }
                }
                button {
                    style: "padding: 4px 10px; border: 1px solid {colors.border}; border-radius: 6px; background: transparent; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| send(EditorEvent::PinToggled),
                    "{pin_label}"
                }
            }

            if is_new {
                button {
                    class: "create-note-btn",
                    style: "
                        padding: 8px 12px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: create_note,
                    "+ Create"
                }
            }
        }
    }
}
