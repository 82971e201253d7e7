//! Sidebar component with tag list

use dioxus::prelude::*;

use keep_core::sidebar::{sidebar_entries, SidebarSelection};
use keep_core::NoteCommand;

use crate::state::AppState;

/// Sidebar showing the note filters and the tag catalog
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let entries = sidebar_entries(&*state.store.read());

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 200px;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px;
                overflow-y: auto;
            ",

            h1 {
                style: "
                    font-size: 20px;
                    font-weight: 600;
                    margin: 0 0 16px 0;
                    color: {colors.text_primary};
                ",
                "Keep"
            }

            for entry in entries {
                {
                    let selection = entry.selection.clone();
                    let key = format!("{:?}", entry.selection);
                    let label = match &entry.selection {
                        SidebarSelection::Tag(tag) => format!("# {tag}"),
                        other => other.label().to_string(),
                    };
                    let mut state = state;
                    rsx! {
                        SidebarItem {
                            key: "{key}",
                            label,
                            count: entry.count,
                            is_active: entry.is_active,
                            onclick: move |_| {
                                tracing::debug!("Sidebar selection: {}", selection);
                                state.dispatch(NoteCommand::SetSelectedTag(selection.clone()));
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Entry in the sidebar
#[component]
fn SidebarItem(
    label: String,
    count: usize,
    is_active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let bg = if is_active {
        colors.accent
    } else {
        "transparent"
    };
    let text_color = if is_active {
        colors.accent_text
    } else {
        colors.text_primary
    };

    rsx! {
        div {
            style: "
                padding: 8px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 4px;
                background: {bg};
                color: {text_color};
                display: flex;
                justify-content: space-between;
                align-items: center;
            ",
            onclick: move |evt| onclick.call(evt),
            span { "{label}" }
            span {
                style: "font-size: 12px; opacity: 0.7;",
                "{count}"
            }
        }
    }
}
