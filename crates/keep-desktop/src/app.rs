//! Main application component

use dioxus::prelude::*;

use keep_core::NoteStore;

use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(crate::config::load_or_default);

    // State signals
    let store = use_signal(|| NoteStore::new(&config));
    let search_query = use_signal(String::new);
    let sort_mode = use_signal(|| config.default_sort);
    let sort_menu_open = use_signal(|| false);
    let theme = use_signal(|| resolve_theme(config.theme));

    use_hook(|| {
        tracing::info!(
            "Store ready with {} catalog tags",
            store.peek().tag_list().len()
        );
    });

    use_context_provider(|| AppState {
        store,
        search_query,
        sort_mode,
        sort_menu_open,
        theme,
    });

    let colors = theme().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
