//! Config file discovery for the desktop app.

use std::path::PathBuf;

use keep_core::config::{load_config, KeepConfig};

/// Environment variable overriding the config file location
const CONFIG_PATH_ENV: &str = "KEEP_CONFIG";

/// Resolve the config file path: `$KEEP_CONFIG`, then the platform config dir.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("keep").join("config.json"))
}

/// Load the user config, falling back to defaults when it is missing or invalid.
pub fn load_or_default() -> KeepConfig {
    let Some(path) = config_path() else {
        tracing::debug!("No config directory available, using defaults");
        return KeepConfig::default();
    };

    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return KeepConfig::default();
    }

    match load_config(&path) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(
                "Failed to load config from {}: {}. Using defaults.",
                path.display(),
                error
            );
            KeepConfig::default()
        }
    }
}
