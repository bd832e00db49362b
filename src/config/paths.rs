// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` or a test directory
//! 2. **Environment variable** - `FLIPBOOK_CONFIG_DIR`, when non-empty
//! 3. **Platform default** - via the `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Flipbook";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FLIPBOOK_CONFIG_DIR";

/// Returns the config directory without an explicit override.
///
/// Platform defaults:
/// - Linux: `~/.config/Flipbook/`
/// - macOS: `~/Library/Application Support/Flipbook/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Flipbook\`
///
/// Returns `None` if the platform has no config directory.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
