//! Simulator executable lookup

use std::ffi::OsString;
use std::path::PathBuf;

use crate::common::{Error, Result};

/// Simulator executable name
pub const SIMULATOR: &str = "sst";

/// Find `name` in the directories of `search_path` (the process `PATH` when
/// `None`), first match wins.
///
/// Any entry with that name counts; whether it can actually be executed only
/// shows up when the runner tries to start it.
pub fn locate_simulator(name: &str, search_path: Option<&OsString>) -> Result<PathBuf> {
    let paths = match search_path {
        Some(p) => Some(p.clone()),
        None => std::env::var_os("PATH"),
    };
    let dirs: Vec<PathBuf> = paths
        .as_ref()
        .map(|p| std::env::split_paths(p).collect())
        .unwrap_or_default();

    if let Some(path) = dirs.iter().map(|dir| dir.join(name)).find(|p| p.exists()) {
        tracing::debug!(simulator = %path.display(), "Located simulator");
        return Ok(path);
    }

    let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
    Err(Error::simulator_not_found(name, &searched))
}
