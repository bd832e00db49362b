// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[viewer]` - Page width and height
//! - `[diagnostics]` - Lifecycle event log capacity
//!
//! Missing sections and keys fall back to defaults. Out-of-range values are
//! clamped when converted into domain types, not when parsed. Sizing mode,
//! cover display and shadow opacity are not settings: unknown keys such as
//! `show_cover` are ignored.
//!
//! # Examples
//!
//! ```no_run
//! use flipbook::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let flip = config.flip_config();
//! assert!(flip.show_cover());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::viewer::{FlipConfig, PageDimension};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Flip widget page size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Page width in pixels.
    #[serde(default = "default_page_width", skip_serializing_if = "Option::is_none")]
    pub page_width: Option<u32>,

    /// Page height in pixels.
    #[serde(default = "default_page_height", skip_serializing_if = "Option::is_none")]
    pub page_height: Option<u32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds the widget parameters, clamping the page size.
    ///
    /// Only width and height come from the file; the rest of the record is
    /// always the viewer's fixed presentation.
    #[must_use]
    pub fn flip_config(&self) -> FlipConfig {
        let viewer = &self.viewer;
        FlipConfig::new(
            PageDimension::new(viewer.page_width.unwrap_or(DEFAULT_PAGE_WIDTH)),
            PageDimension::new(viewer.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT)),
        )
    }

    /// Diagnostics buffer capacity, clamped to the supported range.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_page_width() -> Option<u32> {
    Some(DEFAULT_PAGE_WIDTH)
}

fn default_page_height() -> Option<u32> {
    Some(DEFAULT_PAGE_HEIGHT)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns `(config, warning)`. A missing file yields defaults and no
/// warning; an unreadable or invalid file yields defaults and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir/settings.toml` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!(
                        "Ignoring {}: {err}; using defaults",
                        path.display()
                    )),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to `base_dir/settings.toml` when given.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific file, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
