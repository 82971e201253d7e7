//! Note list projection: search, sidebar filter, sort, and pinned grouping.
//!
//! Everything here is a pure function of the note collection and the
//! [`NoteQuery`]; the list is recomputed on every render.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::models::Note;
use crate::sidebar::SidebarSelection;
use crate::util::contains_ignore_case;

/// Ordering applied to each note group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Low priority first
    #[serde(rename = "lowToHigh")]
    PriorityAscending,
    /// High priority first
    #[serde(rename = "highToLow")]
    PriorityDescending,
    /// Oldest creation time first
    #[serde(rename = "created")]
    Created,
    /// Most recently updated first
    #[default]
    #[serde(rename = "latest", alias = "edited")]
    Latest,
}

impl SortMode {
    /// All modes in menu order
    pub const ALL: [Self; 4] = [
        Self::PriorityAscending,
        Self::PriorityDescending,
        Self::Latest,
        Self::Created,
    ];

    /// Stable identifier, also accepted by `FromStr`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriorityAscending => "lowToHigh",
            Self::PriorityDescending => "highToLow",
            Self::Created => "created",
            Self::Latest => "latest",
        }
    }

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriorityAscending => "Low to High",
            Self::PriorityDescending => "High to Low",
            Self::Created => "Sort by Created",
            Self::Latest => "Sort by Latest",
        }
    }

    /// Heading of the sort menu section listing this mode
    #[must_use]
    pub const fn group(self) -> &'static str {
        match self {
            Self::PriorityAscending | Self::PriorityDescending => "PRIORITY",
            Self::Created | Self::Latest => "DATE",
        }
    }

    /// Compare two notes under this mode
    #[must_use]
    pub fn compare(self, a: &Note, b: &Note) -> Ordering {
        match self {
            Self::PriorityAscending => a.priority.rank().cmp(&b.priority.rank()),
            Self::PriorityDescending => b.priority.rank().cmp(&a.priority.rank()),
            Self::Created => a.created_at.cmp(&b.created_at),
            Self::Latest => b.updated_at.cmp(&a.updated_at),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lowToHigh" => Ok(Self::PriorityAscending),
            "highToLow" => Ok(Self::PriorityDescending),
            "created" => Ok(Self::Created),
            "latest" | "edited" => Ok(Self::Latest),
            other => Err(Error::InvalidInput(format!("Unknown sort mode: {other}"))),
        }
    }
}

/// Inputs to the list projection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Case-insensitive substring matched against title or content
    pub search: String,
    pub sort: SortMode,
    pub selection: SidebarSelection,
}

impl NoteQuery {
    /// Check whether `note` passes both the sidebar filter and the search term
    #[must_use]
    pub fn matches(&self, note: &Note) -> bool {
        self.selection.admits(note) && matches_search(note, &normalize_search(&self.search))
    }
}

/// Filtered notes split into pinned and unpinned groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListView<'a> {
    pub pinned: Vec<&'a Note>,
    pub unpinned: Vec<&'a Note>,
}

impl NoteListView<'_> {
    /// Total number of notes across both groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }

    /// Check if no note matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.unpinned.is_empty()
    }
}

/// Filter, sort and group `notes` for display
#[must_use]
pub fn project<'a>(notes: &'a [Note], query: &NoteQuery) -> NoteListView<'a> {
    let search = normalize_search(&query.search);

    let mut matching: Vec<&Note> = notes
        .iter()
        .filter(|note| query.selection.admits(note))
        .filter(|note| matches_search(note, &search))
        .collect();

    // Stable: ties keep insertion order
    matching.sort_by(|a, b| query.sort.compare(a, b));

    let (pinned, unpinned) = matching.into_iter().partition(|note| note.is_pinned);
    NoteListView { pinned, unpinned }
}

fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn matches_search(note: &Note, search: &str) -> bool {
    search.is_empty()
        || contains_ignore_case(&note.title, search)
        || contains_ignore_case(&note.content, search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteStatus, Priority};
    use pretty_assertions::assert_eq;

    fn note(title: &str, priority: Priority, created_at: i64) -> Note {
        let mut note = Note::new_at(created_at);
        note.title = title.to_string();
        note.priority = priority;
        note
    }

    fn titles(group: &[&Note]) -> Vec<String> {
        group.iter().map(|note| note.title.clone()).collect()
    }

    #[test]
    fn sorts_by_priority_ascending() {
        let notes = vec![
            note("high", Priority::High, 1),
            note("low", Priority::Low, 2),
            note("medium", Priority::Medium, 3),
        ];
        let query = NoteQuery {
            sort: SortMode::PriorityAscending,
            ..NoteQuery::default()
        };

        let view = project(&notes, &query);
        assert_eq!(titles(&view.unpinned), vec!["low", "medium", "high"]);
    }

    #[test]
    fn sorts_by_priority_descending() {
        let notes = vec![
            note("low", Priority::Low, 1),
            note("high", Priority::High, 2),
            note("medium", Priority::Medium, 3),
        ];
        let query = NoteQuery {
            sort: SortMode::PriorityDescending,
            ..NoteQuery::default()
        };

        let view = project(&notes, &query);
        assert_eq!(titles(&view.unpinned), vec!["high", "medium", "low"]);
    }

    #[test]
    fn latest_puts_recent_updates_first() {
        let mut notes = vec![
            note("oldest", Priority::Low, 1),
            note("middle", Priority::Low, 2),
            note("newest", Priority::Low, 3),
        ];
        notes[0].touch(10);

        let view = project(&notes, &NoteQuery::default());
        assert_eq!(titles(&view.unpinned), vec!["oldest", "newest", "middle"]);
    }

    #[test]
    fn created_sorts_oldest_first() {
        let notes = vec![
            note("b", Priority::Low, 20),
            note("a", Priority::Low, 10),
            note("c", Priority::Low, 30),
        ];
        let query = NoteQuery {
            sort: SortMode::Created,
            ..NoteQuery::default()
        };

        assert_eq!(titles(&project(&notes, &query).unpinned), vec!["a", "b", "c"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let notes = vec![
            note("first", Priority::Medium, 5),
            note("second", Priority::Medium, 5),
            note("third", Priority::Medium, 5),
        ];
        let query = NoteQuery {
            sort: SortMode::PriorityAscending,
            ..NoteQuery::default()
        };

        assert_eq!(
            titles(&project(&notes, &query).unpinned),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn pinned_notes_form_their_own_sorted_group() {
        let mut notes = vec![
            note("pinned-high", Priority::High, 1),
            note("plain", Priority::Medium, 2),
            note("pinned-low", Priority::Low, 3),
        ];
        notes[0].is_pinned = true;
        notes[2].is_pinned = true;
        let query = NoteQuery {
            sort: SortMode::PriorityAscending,
            ..NoteQuery::default()
        };

        let view = project(&notes, &query);
        assert_eq!(titles(&view.pinned), vec!["pinned-low", "pinned-high"]);
        assert_eq!(titles(&view.unpinned), vec!["plain"]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let mut notes = vec![
            note("Rust book", Priority::Low, 1),
            note("Shopping", Priority::Low, 2),
            note("Workout", Priority::Low, 3),
        ];
        notes[1].content = "<p>buy RUSTproof paint</p>".to_string();
        let query = NoteQuery {
            search: "  rust ".to_string(),
            ..NoteQuery::default()
        };

        let view = project(&notes, &query);
        let mut found = titles(&view.unpinned);
        found.sort();
        assert_eq!(found, vec!["Rust book", "Shopping"]);
    }

    #[test]
    fn tag_filter_returns_exactly_tagged_notes() {
        let mut notes = vec![
            note("a", Priority::Low, 1),
            note("b", Priority::Low, 2),
            note("c", Priority::Low, 3),
        ];
        notes[2].tags.push("Coding".to_string());
        notes[0].tags.push("Coding".to_string());
        notes[1].tags.push("Quotes".to_string());
        let query = NoteQuery {
            selection: SidebarSelection::Tag("Coding".to_string()),
            sort: SortMode::Created,
            ..NoteQuery::default()
        };

        let view = project(&notes, &query);
        assert_eq!(titles(&view.unpinned), vec!["a", "c"]);
        assert!(view.unpinned.iter().all(|note| note.has_tag("Coding")));
    }

    #[test]
    fn archive_and_trash_follow_status() {
        let mut notes = vec![
            note("active", Priority::Low, 1),
            note("archived", Priority::Low, 2),
            note("trashed", Priority::Low, 3),
        ];
        notes[1].status = NoteStatus::Archived;
        notes[2].status = NoteStatus::Trash;

        let list = |selection: SidebarSelection| {
            let query = NoteQuery {
                selection,
                ..NoteQuery::default()
            };
            titles(&project(&notes, &query).unpinned)
        };

        assert_eq!(list(SidebarSelection::Notes), vec!["active"]);
        assert_eq!(list(SidebarSelection::Archive), vec!["archived"]);
        assert_eq!(list(SidebarSelection::Trash), vec!["trashed"]);
    }

    #[test]
    fn query_matches_agrees_with_projection() {
        let mut tagged = note("Daily standup", Priority::Low, 1);
        tagged.tags.push("Coding".to_string());
        let query = NoteQuery {
            search: "STANDUP".to_string(),
            selection: SidebarSelection::Tag("Coding".to_string()),
            ..NoteQuery::default()
        };

        assert!(query.matches(&tagged));
        tagged.status = NoteStatus::Trash;
        assert!(!query.matches(&tagged));
    }

    #[test]
    fn whitespace_only_search_matches_everything() {
        let notes = vec![
            note("Rust book", Priority::Low, 1),
            note("Shopping", Priority::Low, 2),
        ];
        let query = NoteQuery {
            search: "   ".to_string(),
            ..NoteQuery::default()
        };

        assert_eq!(project(&notes, &query).len(), 2);
    }

    #[test]
    fn menu_groups_follow_menu_order() {
        let groups: Vec<(&str, SortMode)> =
            SortMode::ALL.into_iter().map(|mode| (mode.group(), mode)).collect();
        assert_eq!(
            groups,
            vec![
                ("PRIORITY", SortMode::PriorityAscending),
                ("PRIORITY", SortMode::PriorityDescending),
                ("DATE", SortMode::Latest),
                ("DATE", SortMode::Created),
            ]
        );
    }

    #[test]
    fn sort_mode_parses_ui_values() {
        assert_eq!("lowToHigh".parse::<SortMode>().unwrap(), SortMode::PriorityAscending);
        assert_eq!("edited".parse::<SortMode>().unwrap(), SortMode::Latest);
        assert!("random".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::Latest);
    }

    #[test]
    fn sort_mode_serde_accepts_edited_alias() {
        let mode: SortMode = serde_json::from_str("\"edited\"").unwrap();
        assert_eq!(mode, SortMode::Latest);
        assert_eq!(serde_json::to_string(&SortMode::Created).unwrap(), "\"created\"");
    }
}
