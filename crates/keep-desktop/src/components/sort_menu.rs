//! Sort menu overlay

use dioxus::prelude::*;

use keep_core::view::SortMode;

use crate::state::AppState;

/// Modal listing the available orderings
#[component]
pub fn SortMenu() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let current = (state.sort_mode)();

    let mut sections: Vec<(&'static str, Vec<SortMode>)> = Vec::new();
    for mode in SortMode::ALL {
        match sections.iter_mut().find(|(heading, _)| *heading == mode.group()) {
            Some((_, modes)) => modes.push(mode),
            None => sections.push((mode.group(), vec![mode])),
        }
    }

    rsx! {
        div {
            class: "sort-menu-overlay",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.4);
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |_| state.sort_menu_open.set(false),

            div {
                class: "sort-menu",
                style: "
                    min-width: 260px;
                    padding: 16px;
                    border-radius: 8px;
                    background: {colors.bg_primary};
                    border: 1px solid {colors.border};
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                    h3 { style: "margin: 0;", "Sort" }
                    button {
                        style: "border: none; background: transparent; color: {colors.text_secondary}; cursor: pointer;",
                        onclick: move |_| {
                            state.sort_mode.set(SortMode::default());
                            state.sort_menu_open.set(false);
                        },
                        "CLEAR"
                    }
                }

                for (heading, modes) in sections {
                    div {
                        key: "{heading}",
                        style: "margin-top: 12px;",
                        h4 {
                            style: "margin: 0 0 6px 0; font-size: 12px; color: {colors.text_muted};",
                            "{heading}"
                        }
                        for mode in modes {
                            label {
                                key: "{mode}",
                                style: "display: block; padding: 4px 0; cursor: pointer;",
                                input {
                                    r#type: "radio",
                                    name: "sort-mode",
                                    value: mode.as_str(),
                                    checked: current == mode,
                                    onchange: move |_| {
                                        tracing::debug!("Sort mode: {}", mode);
                                        state.sort_mode.set(mode);
                                        state.sort_menu_open.set(false);
                                    },
                                }
                                " "
                                {mode.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
