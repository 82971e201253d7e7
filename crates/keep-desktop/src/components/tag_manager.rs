//! Tag catalog editor shown under "Edit Tags"

use dioxus::prelude::*;

use keep_core::{Dispatch, NoteCommand};

use crate::state::AppState;

/// Add and remove tags in the global catalog
#[component]
pub fn TagManager() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let tags = state.store.read().tag_list().to_vec();
    let mut new_tag = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut submit = move || {
        let outcome = state.dispatch(NoteCommand::AddCatalogTag(new_tag()));
        match outcome {
            Dispatch::Ignored(reason) => error.set(Some(reason)),
            _ => {
                error.set(None);
                new_tag.set(String::new());
            }
        }
    };

    rsx! {
        div {
            class: "tag-manager",
            style: "
                width: 220px;
                padding: 16px;
                border-right: 1px solid {colors.border};
                background: {colors.bg_secondary};
                overflow-y: auto;
            ",

            h3 { style: "margin: 0 0 12px 0; font-size: 14px;", "Edit Tags" }

            div {
                style: "display: flex; gap: 4px; margin-bottom: 12px;",
                input {
                    r#type: "text",
                    placeholder: "New tag",
                    value: "{new_tag}",
                    oninput: move |evt| new_tag.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                    style: "
                        flex: 1;
                        min-width: 0;
                        padding: 6px 8px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                }
                button {
                    style: "padding: 6px 8px; border: 1px solid {colors.border}; border-radius: 6px; background: {colors.bg_primary}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| submit(),
                    "Add"
                }
            }

            if let Some(message) = error() {
                div {
                    style: "color: {colors.error}; font-size: 12px; margin-bottom: 8px;",
                    "{message}"
                }
            }

            for tag in tags {
                {
                    let removed = tag.clone();
                    rsx! {
                        div {
                            key: "{tag}",
                            style: "display: flex; justify-content: space-between; align-items: center; padding: 6px 4px;",
                            span { "# {tag}" }
                            button {
                                title: "Remove from catalog",
                                style: "border: none; background: transparent; cursor: pointer; color: {colors.text_muted};",
                                onclick: move |_| {
                                    state.dispatch(NoteCommand::RemoveCatalogTag(removed.clone()));
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
