//! Tool-wide settings stored in `<wsp home>/settings.yaml`.
//!
//! Every key is optional. A missing file yields the defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use wsp_core::error::{Result, WspError};
use wsp_core::user_paths::expand_tilde;
use wsp_platform::{LaunchOptions, McpTargetSpec, PlatformProvider};

/// Root structure of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Applications that receive MCP servers. Platform defaults when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_targets: Option<Vec<McpTargetSetting>>,

    /// Command that opens an editor project file.
    #[serde(default = "default_editor_command")]
    pub editor_command: String,

    /// Terminal application. Platform default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_app: Option<String>,

    /// Pause between quitting and relaunching an application.
    #[serde(default = "default_restart_delay_ms")]
    pub restart_delay_ms: u64,

    /// Unknown keys, kept so a rewrite does not lose them.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpTargetSetting {
    pub name: String,
    pub config_path: String,
}

fn default_editor_command() -> String {
    "code".to_string()
}

fn default_restart_delay_ms() -> u64 {
    2000
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            mcp_targets: None,
            editor_command: default_editor_command(),
            terminal_app: None,
            restart_delay_ms: default_restart_delay_ms(),
            extra: IndexMap::new(),
        }
    }
}

impl GlobalSettings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|e| WspError::filesystem(e, path, "read"))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(&content)
            .map_err(|e| WspError::parse(format!("settings file '{}'", path.display()), e))
    }

    /// Load from the user's wsp home.
    pub fn load_default() -> Result<Self> {
        Self::load(&wsp_core::user_paths::settings_path()?)
    }

    /// Configured targets with `~` expanded, or the platform's defaults.
    pub fn mcp_targets(&self, platform: &dyn PlatformProvider) -> Result<Vec<McpTargetSpec>> {
        match &self.mcp_targets {
            Some(targets) => Ok(targets
                .iter()
                .map(|target| McpTargetSpec {
                    name: target.name.clone(),
                    config_path: expand_tilde(&target.config_path),
                })
                .collect()),
            None => platform.default_mcp_targets().map_err(WspError::from),
        }
    }

    pub fn launch_options(&self, platform: &dyn PlatformProvider) -> LaunchOptions {
        LaunchOptions {
            editor_command: self.editor_command.clone(),
            terminal_app: self
                .terminal_app
                .clone()
                .unwrap_or_else(|| platform.default_terminal_app().to_string()),
            restart_delay: Duration::from_millis(self.restart_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wsp_platform::providers::UnixPlatform;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = GlobalSettings::load(&temp_dir.path().join("settings.yaml")).unwrap();
        assert_eq!(settings, GlobalSettings::default());
        assert_eq!(settings.editor_command, "code");
        assert_eq!(settings.restart_delay_ms, 2000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        fs::write(
            &path,
            "terminal_app: kitty\nmcp_targets:\n  - name: Local\n    config_path: /tmp/local/mcp.json\n",
        )
        .unwrap();

        let settings = GlobalSettings::load(&path).unwrap();
        assert_eq!(settings.terminal_app.as_deref(), Some("kitty"));
        assert_eq!(settings.editor_command, "code");

        let targets = settings.mcp_targets(&UnixPlatform).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].config_path, PathBuf::from("/tmp/local/mcp.json"));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        fs::write(&path, "restart_delay_ms: [not, a, number]\n").unwrap();
        assert!(matches!(
            GlobalSettings::load(&path).unwrap_err(),
            WspError::Parse { .. }
        ));
    }

    #[test]
    fn test_launch_options_fall_back_to_platform_terminal() {
        let options = GlobalSettings::default().launch_options(&UnixPlatform);
        assert_eq!(options.terminal_app, "x-terminal-emulator");
        assert_eq!(options.restart_delay, Duration::from_millis(2000));
    }
}
