//! Application configuration.
//!
//! Provides `KeepConfig`, the optional JSON file that seeds the tag catalog and
//! the initial list and theme preferences. Every field has a default, so an
//! empty object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DEFAULT_UNTITLED_TITLE;
use crate::sidebar::SidebarSelection;
use crate::util::{normalize_tag, push_unique};
use crate::view::SortMode;

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// User-provided application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeepConfig {
    /// Tags present in the catalog at startup
    pub default_tags: Vec<String>,
    /// Title shown for notes with a blank title
    pub untitled_title: String,
    /// Initial note list ordering
    pub default_sort: SortMode,
    pub theme: ThemeMode,
}

impl Default for KeepConfig {
    fn default() -> Self {
        Self {
            default_tags: vec![
                "Coding".to_string(),
                "Exercise".to_string(),
                "Quotes".to_string(),
            ],
            untitled_title: DEFAULT_UNTITLED_TITLE.to_string(),
            default_sort: SortMode::Latest,
            theme: ThemeMode::System,
        }
    }
}

impl KeepConfig {
    /// Trim and deduplicate tags, rejecting blank values.
    pub fn validated(self) -> Result<Self> {
        let mut default_tags = Vec::with_capacity(self.default_tags.len());
        for raw in &self.default_tags {
            let tag = normalize_tag(raw).ok_or_else(|| {
                Error::InvalidInput("config field 'default_tags' contains a blank tag".to_string())
            })?;
            if SidebarSelection::is_reserved_label(&tag) {
                return Err(Error::InvalidInput(format!(
                    "config field 'default_tags' contains reserved name '{tag}'"
                )));
            }
            push_unique(&mut default_tags, tag);
        }

        let untitled_title = self.untitled_title.trim().to_string();
        if untitled_title.is_empty() {
            return Err(Error::InvalidInput(
                "config field 'untitled_title' must not be empty".to_string(),
            ));
        }

        Ok(Self {
            default_tags,
            untitled_title,
            ..self
        })
    }
}

/// Parse and validate a configuration from a raw JSON payload.
pub fn parse_config(payload: &str) -> Result<KeepConfig> {
    let config: KeepConfig = serde_json::from_str(payload)?;
    config.validated()
}

/// Read and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<KeepConfig> {
    let payload = std::fs::read_to_string(path)?;
    let config = parse_config(&payload)?;
    tracing::debug!(
        "Loaded config from {} ({} catalog tags)",
        path.display(),
        config.default_tags.len()
    );
    Ok(config)
}
