//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/sst-regress/`
//! - macOS: `~/Library/Application Support/sst-regress/`
//! - Windows: `%APPDATA%\sst-regress\`

use std::path::PathBuf;

const APP_NAME: &str = "sst-regress";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the user configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
