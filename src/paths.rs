//! Centralized path definitions
//!
//! ## Layout
//!
//! ```text
//! $XDG_CONFIG_HOME/isis-adjacency/   (usually ~/.config/isis-adjacency)
//! └── config.toml                    # Discovery rules
//! ```

use std::path::PathBuf;

/// Application directory name under the user config directory
const APP_DIR: &str = "isis-adjacency";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user-level config directory.
///
/// Falls back to `./.isis-adjacency` when the platform has no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(".").join(format!(".{APP_DIR}")),
        |dir| dir.join(APP_DIR),
    )
}

/// Get the default config file path.
#[must_use]
pub fn default_config() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
