//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{BackgroundColor, NoteStatus, Priority};

/// Title shown for notes whose title is blank
pub const DEFAULT_UNTITLED_TITLE: &str = "Untitled";

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Free text title, may be blank
    pub title: String,
    /// Rich-text markup produced by the editor surface
    pub content: String,
    /// Labels in insertion order, without duplicates
    pub tags: Vec<String>,
    pub priority: Priority,
    pub background_color: BackgroundColor,
    /// Shown in the pinned group when set
    pub is_pinned: bool,
    pub status: NoteStatus,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
}

impl Note {
    /// Create an empty note stamped with the current wall-clock time
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(chrono::Utc::now().timestamp_millis())
    }

    /// Create an empty note stamped with `now` (Unix ms)
    #[must_use]
    pub fn new_at(now: i64) -> Self {
        Self {
            id: NoteId::new(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            priority: Priority::Low,
            background_color: BackgroundColor::White,
            is_pinned: false,
            status: NoteStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`, never moving it backwards
    pub fn touch(&mut self, now: i64) {
        self.updated_at = self.updated_at.max(now);
    }

    /// Title for display, falling back to `placeholder` when blank
    #[must_use]
    pub fn display_title<'a>(&'a self, placeholder: &'a str) -> &'a str {
        let title = self.title.trim();
        if title.is_empty() {
            placeholder
        } else {
            title
        }
    }

    /// Check whether the note carries `tag` (exact match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check whether the note is in the main list
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == NoteStatus::Active
    }

    /// Plain-text preview of the content with markup removed, truncated to
    /// `max_len` characters
    #[must_use]
    pub fn text_preview(&self, max_len: usize) -> String {
        let mut text = String::with_capacity(self.content.len());
        let mut in_tag = false;
        for ch in self.content.chars() {
            match ch {
                '<' => {
                    in_tag = true;
                    text.push(' ');
                }
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }

        let text = text
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&");
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(max_len)
            .collect()
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new_defaults() {
        let note = Note::new_at(42);
        assert!(note.title.is_empty());
        assert!(note.content.is_empty());
        assert!(note.tags.is_empty());
        assert_eq!(note.priority, Priority::Low);
        assert_eq!(note.background_color, BackgroundColor::White);
        assert!(!note.is_pinned);
        assert_eq!(note.status, NoteStatus::Active);
        assert_eq!(note.created_at, 42);
        assert_eq!(note.updated_at, 42);
    }

    #[test]
    fn test_touch_never_goes_backwards() {
        let mut note = Note::new_at(100);
        note.touch(50);
        assert_eq!(note.updated_at, 100);
        note.touch(150);
        assert_eq!(note.updated_at, 150);
    }

    #[test]
    fn test_display_title_placeholder() {
        let mut note = Note::new_at(0);
        assert_eq!(note.display_title(DEFAULT_UNTITLED_TITLE), "Untitled");

        note.title = "  Groceries ".to_string();
        assert_eq!(note.display_title(DEFAULT_UNTITLED_TITLE), "Groceries");
    }

    #[test]
    fn test_text_preview_strips_markup() {
        let mut note = Note::new_at(0);
        note.content = "<ul><li>Milk</li><li>Eggs &amp; bread</li></ul><b>done</b>".to_string();
        assert_eq!(note.text_preview(100), "Milk Eggs & bread done");
        assert_eq!(note.text_preview(4), "Milk");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let note = Note::new_at(7);
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["backgroundColor"], "White");
        assert_eq!(json["isPinned"], false);
        assert_eq!(json["status"], "active");
        assert_eq!(json["createdAt"], 7);
    }
}
