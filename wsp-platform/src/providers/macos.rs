//! macOS platform provider implementation.
//!
//! Everything goes through `open(1)` and `osascript(1)`. AppleScript never
//! has user values spliced into its source: they are passed as `argv`.

use crate::action::{LaunchAction, LaunchCommand, LaunchOptions, LaunchStep};
use crate::traits::{McpTargetSpec, PlatformProvider};
use anyhow::{Context, Result};

/// macOS platform provider
pub struct MacOSPlatform;

const QUIT_APP_SCRIPT: [&str; 3] = [
    "on run argv",
    "tell application (item 1 of argv) to quit",
    "end run",
];

// Safari exposes profiles as "File > New Window > New <profile> Window".
const SAFARI_PROFILE_SCRIPT: [&str; 8] = [
    "on run argv",
    "set profileName to item 1 of argv",
    "tell application \"Safari\" to activate",
    "delay 0.5",
    "tell application \"System Events\" to tell process \"Safari\"",
    "click menu item (\"New \" & profileName & \" Window\") of menu 1 of menu item \"New Window\" of menu \"File\" of menu bar 1",
    "end tell",
    "end run",
];

const RUNNING_APPS_SCRIPT: &str =
    "tell application \"System Events\" to get name of every process whose background only is false";

fn osascript(lines: &[&str], argv: &[&str]) -> LaunchCommand {
    let mut args = Vec::with_capacity(lines.len() * 2 + argv.len());
    for line in lines {
        args.push("-e".to_string());
        args.push((*line).to_string());
    }
    args.extend(argv.iter().map(|a| a.to_string()));
    LaunchCommand::new("osascript", args)
}

fn open_application(name: &str, bundle_identifier: Option<&str>) -> LaunchCommand {
    match bundle_identifier {
        Some(bundle) => LaunchCommand::new("open", ["-b", bundle]),
        None => LaunchCommand::new("open", ["-a", name]),
    }
}

impl PlatformProvider for MacOSPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn default_terminal_app(&self) -> &'static str {
        "Terminal"
    }

    fn default_mcp_targets(&self) -> Result<Vec<McpTargetSpec>> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(vec![
            McpTargetSpec {
                name: "Claude".to_string(),
                config_path: home
                    .join("Library")
                    .join("Application Support")
                    .join("Claude")
                    .join("claude_desktop_config.json"),
            },
            McpTargetSpec {
                name: "Cursor".to_string(),
                config_path: home.join(".cursor").join("mcp.json"),
            },
        ])
    }

    fn plan(&self, action: &LaunchAction, options: &LaunchOptions) -> Vec<LaunchStep> {
        match action {
            LaunchAction::LaunchApplication {
                name,
                bundle_identifier,
                browser_profile,
            } => match browser_profile {
                Some(profile) => vec![LaunchStep::Run(osascript(
                    &SAFARI_PROFILE_SCRIPT,
                    &[profile.as_str()],
                ))],
                None => vec![LaunchStep::Run(open_application(
                    name,
                    bundle_identifier.as_deref(),
                ))],
            },
            LaunchAction::OpenUrl(url) => {
                vec![LaunchStep::Run(LaunchCommand::new("open", [url.as_str()]))]
            }
            LaunchAction::OpenTerminal(path) => {
                let path = path.display().to_string();
                vec![LaunchStep::Run(LaunchCommand::new(
                    "open",
                    ["-a", options.terminal_app.as_str(), path.as_str()],
                ))]
            }
            LaunchAction::OpenEditorProject(path) => {
                let path = path.display().to_string();
                vec![LaunchStep::Run(LaunchCommand::new(
                    options.editor_command.as_str(),
                    [path],
                ))]
            }
            LaunchAction::RestartApplication(name) => vec![
                LaunchStep::Run(osascript(&QUIT_APP_SCRIPT, &[name.as_str()])),
                LaunchStep::Pause(options.restart_delay),
                LaunchStep::Run(open_application(name, None)),
            ],
        }
    }

    fn running_apps_command(&self) -> Option<LaunchCommand> {
        Some(osascript(&[RUNNING_APPS_SCRIPT], &[]))
    }
}
