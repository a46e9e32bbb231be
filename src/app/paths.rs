// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a directory wins:
//!
//! 1. an explicit override (tests)
//! 2. `--config-dir`, recorded by [`init_cli_overrides`]
//! 3. the `AI_GALLERY_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/AIGallery` from the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "AIGallery";

pub const ENV_CONFIG_DIR: &str = "AI_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Config directory, or `None` when the platform has none.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}
