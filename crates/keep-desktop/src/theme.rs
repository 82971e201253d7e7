//! Theme configuration for the desktop app

use std::sync::OnceLock;

use keep_core::config::ThemeMode;
use keep_core::models::BackgroundColor;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => {
            let is_dark = String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark");
            tracing::debug!("System theme detected: dark={}", is_dark);
            is_dark
        }
        Err(e) => {
            tracing::warn!(
                "Failed to detect system theme: {}. Defaulting to light mode.",
                e
            );
            false
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    // GTK_THEME is the only cheap signal outside macOS
    std::env::var("GTK_THEME").map_or_else(
        |_| {
            tracing::debug!("GTK_THEME not set, defaulting to light mode");
            false
        },
        |theme| {
            let is_dark = theme.to_lowercase().contains("dark");
            tracing::debug!("System theme detected from GTK_THEME: dark={}", is_dark);
            is_dark
        },
    )
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    bg_tertiary: "#f1f3f4",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#f4b400",
    accent_text: "#1a1a1a",
    error: "#dc2626",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#202124",
    bg_secondary: "#28292c",
    bg_tertiary: "#35363a",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#fdd663",
    accent_text: "#202124",
    error: "#f87171",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Card color for a note background
    #[must_use]
    pub const fn note_background(self, color: BackgroundColor) -> &'static str {
        match (self, color) {
            (Self::Light, BackgroundColor::White) => "#ffffff",
            (Self::Light, BackgroundColor::Red) => "#f28b82",
            (Self::Light, BackgroundColor::Green) => "#ccff90",
            (Self::Light, BackgroundColor::Blue) => "#aecbfa",
            (Self::Light, BackgroundColor::Yellow) => "#fff475",
            (Self::Light, BackgroundColor::Pink) => "#fdcfe8",
            (Self::Dark, BackgroundColor::White) => "#202124",
            (Self::Dark, BackgroundColor::Red) => "#5c2b29",
            (Self::Dark, BackgroundColor::Green) => "#345920",
            (Self::Dark, BackgroundColor::Blue) => "#1e3a5f",
            (Self::Dark, BackgroundColor::Yellow) => "#635d19",
            (Self::Dark, BackgroundColor::Pink) => "#5b2245",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
    }

    #[test]
    fn white_cards_follow_theme_background() {
        assert_eq!(
            ResolvedTheme::Light.note_background(BackgroundColor::White),
            LIGHT_PALETTE.bg_primary
        );
        assert_eq!(
            ResolvedTheme::Dark.note_background(BackgroundColor::White),
            DARK_PALETTE.bg_primary
        );
    }
}
