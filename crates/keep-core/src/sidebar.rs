//! Sidebar navigation: the selectable filters and their note counts.

use std::fmt;

use crate::clock::Clock;
use crate::models::{Note, NoteStatus};
use crate::store::NoteStore;

/// Current sidebar filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SidebarSelection {
    /// Every active note
    #[default]
    Notes,
    /// Active notes carrying the tag
    Tag(String),
    /// Tag catalog management; lists every active note
    EditTags,
    /// Archived notes
    Archive,
    /// Notes waiting for permanent deletion
    Trash,
}

impl SidebarSelection {
    /// Map a sidebar label back to a selection.
    ///
    /// The fixed labels win over tags of the same name, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "notes" => Self::Notes,
            "edit tags" | "edit notes" => Self::EditTags,
            "archive" => Self::Archive,
            "trash" => Self::Trash,
            _ => Self::Tag(label.trim().to_string()),
        }
    }

    /// Check whether `label` would shadow one of the fixed entries
    #[must_use]
    pub fn is_reserved_label(label: &str) -> bool {
        !matches!(Self::from_label(label), Self::Tag(_))
    }

    /// Label shown in the sidebar
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Notes => "Notes",
            Self::Tag(tag) => tag,
            Self::EditTags => "Edit Tags",
            Self::Archive => "Archive",
            Self::Trash => "Trash",
        }
    }

    /// Check whether `note` belongs in the list under this selection
    #[must_use]
    pub fn admits(&self, note: &Note) -> bool {
        match self {
            Self::Notes | Self::EditTags => note.status == NoteStatus::Active,
            Self::Tag(tag) => note.status == NoteStatus::Active && note.has_tag(tag),
            Self::Archive => note.status == NoteStatus::Archived,
            Self::Trash => note.status == NoteStatus::Trash,
        }
    }
}

impl fmt::Display for SidebarSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub selection: SidebarSelection,
    pub label: String,
    /// Number of notes the entry would list
    pub count: usize,
    pub is_active: bool,
}

/// Build the sidebar rows: Notes, one row per catalog tag, then Edit Tags,
/// Archive and Trash.
#[must_use]
pub fn sidebar_entries<C: Clock>(store: &NoteStore<C>) -> Vec<SidebarEntry> {
    let notes = store.notes();
    let current = store.selected_tag();

    let mut selections = Vec::with_capacity(store.tag_list().len() + 4);
    selections.push(SidebarSelection::Notes);
    selections.extend(
        store
            .tag_list()
            .iter()
            .map(|tag| SidebarSelection::Tag(tag.clone())),
    );
    selections.push(SidebarSelection::EditTags);
    selections.push(SidebarSelection::Archive);
    selections.push(SidebarSelection::Trash);

    selections
        .into_iter()
        .map(|selection| {
            let count = notes.iter().filter(|note| selection.admits(note)).count();
            SidebarEntry {
                label: selection.label().to_string(),
                is_active: &selection == current,
                count,
                selection,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::KeepConfig;
    use pretty_assertions::assert_eq;

    fn store() -> NoteStore<ManualClock> {
        NoteStore::with_clock(&KeepConfig::default(), ManualClock::new(1_000))
    }

    #[test]
    fn from_label_maps_fixed_entries() {
        assert_eq!(SidebarSelection::from_label("Notes"), SidebarSelection::Notes);
        assert_eq!(SidebarSelection::from_label("Edit Notes"), SidebarSelection::EditTags);
        assert_eq!(SidebarSelection::from_label("Trash"), SidebarSelection::Trash);
        assert_eq!(
            SidebarSelection::from_label("Coding"),
            SidebarSelection::Tag("Coding".to_string())
        );
    }

    #[test]
    fn reserved_labels_ignore_case() {
        assert!(SidebarSelection::is_reserved_label("trash"));
        assert!(SidebarSelection::is_reserved_label(" Edit Tags "));
        assert!(SidebarSelection::is_reserved_label("NOTES"));
        assert!(!SidebarSelection::is_reserved_label("Trashy"));
        assert!(!SidebarSelection::is_reserved_label("Coding"));
    }

    #[test]
    fn entries_list_catalog_between_fixed_rows() {
        let store = store();
        let labels: Vec<String> = sidebar_entries(&store)
            .into_iter()
            .map(|entry| entry.label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Notes", "Coding", "Exercise", "Quotes", "Edit Tags", "Archive", "Trash"
            ]
        );
    }

    #[test]
    fn entries_count_notes_per_filter() {
        let mut store = store();
        let a = store.create_note();
        let b = store.create_note();
        let c = store.create_note();
        store.add_tag(&a, "Coding").unwrap();
        store.add_tag(&b, "Coding").unwrap();
        store.trash_note(&b).unwrap();
        store.archive_note(&c).unwrap();

        let entries = sidebar_entries(&store);
        let count = |label: &str| {
            entries
                .iter()
                .find(|entry| entry.label == label)
                .map(|entry| entry.count)
        };

        assert_eq!(count("Notes"), Some(1));
        assert_eq!(count("Coding"), Some(1));
        assert_eq!(count("Exercise"), Some(0));
        assert_eq!(count("Archive"), Some(1));
        assert_eq!(count("Trash"), Some(1));
    }

    #[test]
    fn entries_mark_current_selection() {
        let mut store = store();
        store.set_selected_tag(SidebarSelection::Tag("Quotes".to_string()));

        let active: Vec<String> = sidebar_entries(&store)
            .into_iter()
            .filter(|entry| entry.is_active)
            .map(|entry| entry.label)
            .collect();
        assert_eq!(active, vec!["Quotes"]);
    }
}
