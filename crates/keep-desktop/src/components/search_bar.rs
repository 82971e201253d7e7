//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search input plus the sort menu toggle
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let sort_label = (state.sort_mode)().label();

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            input {
                r#type: "text",
                placeholder: "Search titles and content...",
                value: "{state.search_query}",
                oninput: move |evt| {
                    state.search_query.set(evt.value());
                },
                style: "
                    flex: 1;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            button {
                style: "
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_secondary};
                    cursor: pointer;
                ",
                onclick: move |_| state.sort_menu_open.set(true),
                "{sort_label}"
            }
        }
    }
}
