//! UI Components
//!
//! Reusable UI components for the desktop application.

mod format_toolbar;
mod note_card;
mod note_editor;
mod note_list;
mod search_bar;
mod sidebar;
mod sort_menu;
mod tag_manager;

pub use format_toolbar::FormatToolbar;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use sort_menu::SortMenu;
pub use tag_manager::TagManager;
