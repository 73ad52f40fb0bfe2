//! User directory resolution for wsp.
//!
//! Everything wsp persists lives under one root so tests and alternative
//! setups can relocate it with a single environment variable.

use crate::error::{Result, WspError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the storage root.
pub const WSP_HOME_ENV: &str = "WSP_HOME";

/// Get the storage root.
///
/// Returns:
/// - `$WSP_HOME` when set and non-empty
/// - Linux: `~/.config/wsp` or `$XDG_CONFIG_HOME/wsp`
/// - macOS: `~/Library/Application Support/wsp`
#[must_use = "storage root path should be used"]
pub fn wsp_home() -> Result<PathBuf> {
    if let Some(root) = env::var_os(WSP_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(root));
    }
    dirs::config_dir()
        .map(|dir| dir.join("wsp"))
        .ok_or_else(|| WspError::Validation("Could not determine user config directory".into()))
}

/// Directory holding one JSON record per workspace.
pub fn workspaces_dir() -> Result<PathBuf> {
    Ok(wsp_home()?.join("workspaces"))
}

/// Path to the optional global settings file.
pub fn settings_path() -> Result<PathBuf> {
    Ok(wsp_home()?.join("settings.yaml"))
}

pub fn snapshots_dir() -> Result<PathBuf> {
    Ok(wsp_home()?.join("snapshots"))
}

/// Default log file location used when file logging is enabled.
pub fn default_log_path() -> PathBuf {
    wsp_home()
        .map(|root| root.join("wsp.log"))
        .unwrap_or_else(|_| env::temp_dir().join("wsp.log"))
}

#[must_use = "home directory path should be used"]
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| WspError::Validation("Could not determine home directory".into()))
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Like [`expand_tilde`] but for an existing `Path`.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}
