//! Core traits for platform abstraction.
//!
//! `PlatformProvider` is the pure, per-OS knowledge (how to express an action
//! as commands, where AI apps keep their config). `Launcher` and
//! `Snapshotter` are the side-effecting capabilities the workspace manager
//! depends on, so tests can substitute recording fakes.

use crate::action::{LaunchAction, LaunchCommand, LaunchOptions, LaunchStep};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// An application whose own JSON config receives a workspace's MCP servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpTargetSpec {
    pub name: String,
    pub config_path: PathBuf,
}

impl McpTargetSpec {
    /// The application's configuration directory. Its absence means the
    /// application is not installed.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_path.parent()
    }
}

/// Core platform abstraction trait.
pub trait PlatformProvider: Send + Sync {
    /// Get the platform name (e.g., "unix", "macos")
    fn name(&self) -> &'static str;

    /// Terminal application used when settings do not name one
    fn default_terminal_app(&self) -> &'static str;

    /// AI applications known to read `mcpServers` from a JSON config
    fn default_mcp_targets(&self) -> Result<Vec<McpTargetSpec>>;

    /// Translate an action into the steps that perform it
    fn plan(&self, action: &LaunchAction, options: &LaunchOptions) -> Vec<LaunchStep>;

    /// Command that prints the names of running foreground applications,
    /// or `None` when the platform cannot list them
    fn running_apps_command(&self) -> Option<LaunchCommand>;
}

/// Performs launch side effects on behalf of the workspace manager.
pub trait Launcher {
    fn perform(&self, action: &LaunchAction) -> Result<()>;
}

/// Captures the current desktop state before a switch.
pub trait Snapshotter {
    /// Returns the location the snapshot was written to.
    fn capture(&self) -> Result<PathBuf>;
}
