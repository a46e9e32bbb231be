// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Analyze endpoint and request timeout
//! - `[upload]` - What to keep from a batch with failures
//! - `[gallery]` - Grid layout
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag, then the `AI_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use ai_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings fell back to defaults: {key}");
//! }
//! let _timeout = config.service.timeout();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::BatchPolicy;
use crate::domain::ui::{GridColumns, KeywordPreview};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Analyze service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// URL the images are posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds; `0` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Timeout to apply to each request, `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs.min(MAX_TIMEOUT_SECS))),
        }
    }
}

/// Upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UploadConfig {
    #[serde(default)]
    pub batch_policy: BatchPolicy,
}

/// Gallery layout settings. Out-of-range values are clamped on use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default = "default_keyword_preview")]
    pub keyword_preview: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            keyword_preview: DEFAULT_KEYWORD_PREVIEW,
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn grid_columns(&self) -> GridColumns {
        GridColumns::new(self.columns)
    }

    #[must_use]
    pub fn keyword_preview(&self) -> KeywordPreview {
        KeywordPreview::new(self.keyword_preview)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_columns() -> usize {
    DEFAULT_GRID_COLUMNS
}

fn default_keyword_preview() -> usize {
    DEFAULT_KEYWORD_PREVIEW
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => {
                    eprintln!("Failed to load {}: {}", path.display(), err);
                    (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    )
                }
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
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
