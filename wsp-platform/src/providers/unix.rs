//! Unix platform provider implementation (Linux and other freedesktop systems).

use crate::action::{LaunchAction, LaunchCommand, LaunchOptions, LaunchStep};
use crate::traits::{McpTargetSpec, PlatformProvider};
use anyhow::{Context, Result};

/// Unix platform provider (Linux and other Unix-like systems)
pub struct UnixPlatform;

fn launch_application(name: &str, bundle_identifier: Option<&str>) -> LaunchCommand {
    match bundle_identifier {
        // Desktop entry ids play the role of bundle identifiers here
        Some(desktop_id) => LaunchCommand::new("gtk-launch", [desktop_id]),
        None => LaunchCommand::new(name, Vec::<String>::new()).detached(),
    }
}

impl PlatformProvider for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn default_terminal_app(&self) -> &'static str {
        "x-terminal-emulator"
    }

    fn default_mcp_targets(&self) -> Result<Vec<McpTargetSpec>> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        let config = dirs::config_dir().unwrap_or_else(|| home.join(".config"));
        Ok(vec![
            McpTargetSpec {
                name: "Claude".to_string(),
                config_path: config.join("Claude").join("claude_desktop_config.json"),
            },
            McpTargetSpec {
                name: "Cursor".to_string(),
                config_path: home.join(".cursor").join("mcp.json"),
            },
        ])
    }

    fn plan(&self, action: &LaunchAction, options: &LaunchOptions) -> Vec<LaunchStep> {
        match action {
            // No browser on this platform exposes profiles through automation
            LaunchAction::LaunchApplication {
                name,
                bundle_identifier,
                ..
            } => vec![LaunchStep::Run(launch_application(
                name,
                bundle_identifier.as_deref(),
            ))],
            LaunchAction::OpenUrl(url) => {
                vec![LaunchStep::Run(LaunchCommand::new("xdg-open", [url.as_str()]))]
            }
            LaunchAction::OpenTerminal(path) => vec![LaunchStep::Run(
                LaunchCommand::new(options.terminal_app.as_str(), Vec::<String>::new())
                    .in_dir(path)
                    .detached(),
            )],
            LaunchAction::OpenEditorProject(path) => {
                let path = path.display().to_string();
                vec![LaunchStep::Run(LaunchCommand::new(
                    options.editor_command.as_str(),
                    [path],
                ))]
            }
            LaunchAction::RestartApplication(name) => vec![
                // pkill exits 1 when no process matched
                LaunchStep::Run(
                    LaunchCommand::new("pkill", ["-x", name.as_str()]).accepting_exit_code(1),
                ),
                LaunchStep::Pause(options.restart_delay),
                LaunchStep::Run(launch_application(name, None)),
            ],
        }
    }

    fn running_apps_command(&self) -> Option<LaunchCommand> {
        None
    }
}
