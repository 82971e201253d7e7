//! Enumerated note attributes: priority, background color, and status.
//!
//! These are the only externally meaningful vocabulary of a note. They
//! serialize as the literal strings the UI shows and parse case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How important a note is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Fixed sort rank: Low=1, Medium=2, High=3
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown priority: {s}")))
    }
}

/// Card background color, drawn from a fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BackgroundColor {
    #[default]
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
}

impl BackgroundColor {
    /// The full palette in menu order
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Pink,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Pink => "Pink",
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown background color: {s}")))
    }
}

/// Where a note lives: the main list, the archive, or the trash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    Active,
    Archived,
    Trash,
}

impl NoteStatus {
    /// Serialized name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Active, Self::Archived, Self::Trash]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown note status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Low.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::High.rank());
    }

    #[test]
    fn test_priority_parse_case_insensitive() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_background_color_parse() {
        assert_eq!("PINK".parse::<BackgroundColor>().unwrap(), BackgroundColor::Pink);
        assert!("Purple".parse::<BackgroundColor>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&NoteStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        assert_eq!("TRASH".parse::<NoteStatus>().unwrap(), NoteStatus::Trash);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Priority::default(), Priority::Low);
        assert_eq!(BackgroundColor::default(), BackgroundColor::White);
        assert_eq!(NoteStatus::default(), NoteStatus::Active);
    }
}
