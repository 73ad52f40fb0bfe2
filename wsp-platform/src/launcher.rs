//! The real launcher: plans an action with the current platform provider and
//! runs the resulting commands.

use crate::action::{LaunchAction, LaunchCommand, LaunchOptions, LaunchStep};
use crate::traits::{Launcher, PlatformProvider};
use anyhow::{anyhow, bail, Context, Result};
use duct::cmd;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};
use which::which;

pub struct SystemLauncher {
    platform: Arc<dyn PlatformProvider>,
    options: LaunchOptions,
}

impl SystemLauncher {
    pub fn new(platform: Arc<dyn PlatformProvider>, options: LaunchOptions) -> Self {
        Self { platform, options }
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }
}

/// Run one command, waiting for it or leaving it running as requested.
pub fn run_command(command: &LaunchCommand) -> Result<()> {
    which(&command.program)
        .map_err(|_| anyhow!("'{}' was not found on PATH", command.program))?;

    // A detached child must not hold a pipe back to this process: once wsp
    // exits its next write to stderr would raise SIGPIPE.
    let mut expression = cmd(command.program.as_str(), &command.args)
        .stdin_null()
        .stdout_null()
        .unchecked();
    expression = if command.wait {
        expression.stderr_capture()
    } else {
        expression.stderr_null()
    };
    if let Some(dir) = &command.current_dir {
        if !dir.is_dir() {
            bail!("directory '{}' does not exist", dir.display());
        }
        expression = expression.dir(dir);
    }

    debug!(command = %command, wait = command.wait, "running launch command");

    if !command.wait {
        expression
            .start()
            .with_context(|| format!("failed to start '{}'", command.program))?;
        return Ok(());
    }

    let output = expression
        .run()
        .with_context(|| format!("failed to run '{}'", command.program))?;
    if !command.accepts(output.status) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        if detail.is_empty() {
            bail!("'{}' exited with {}", command, output.status);
        }
        bail!("'{}' exited with {}: {}", command, output.status, detail);
    }
    Ok(())
}

impl Launcher for SystemLauncher {
    fn perform(&self, action: &LaunchAction) -> Result<()> {
        info!(action = action.kind(), subject = %action.target(), "performing launch action");
        for step in self.platform.plan(action, &self.options) {
            match step {
                LaunchStep::Run(command) => run_command(&command)?,
                LaunchStep::Pause(duration) => thread::sleep(duration),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_missing_program_is_reported() {
        let command = LaunchCommand::new("wsp-definitely-not-installed", ["x"]);
        let err = run_command(&command).unwrap_err();
        assert!(err.to_string().contains("was not found on PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_directory_is_reported() {
        let command = LaunchCommand::new("true", Vec::<String>::new())
            .in_dir("/definitely/not/here");
        let err = run_command(&command).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_accepted_exit_code_is_not_an_error() {
        let command = LaunchCommand::new("sh", ["-c", "exit 1"]).accepting_exit_code(1);
        assert!(run_command(&command).is_ok());
        let command = LaunchCommand::new("sh", ["-c", "exit 2"]).accepting_exit_code(1);
        assert!(run_command(&command).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_detached_command_survives_writing_to_stderr() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let marker = temp_dir.path().join("marker");
        let script = format!("sleep 1; echo warning >&2; touch '{}'", marker.display());
        run_command(&LaunchCommand::new("sh", ["-c", script.as_str()]).detached()).unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        while !marker.exists() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(50));
        }
        assert!(marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_restart_relaunches_when_nothing_was_running() {
        if which("pkill").is_err() {
            return;
        }
        let launcher = SystemLauncher::new(
            Arc::new(crate::providers::UnixPlatform),
            LaunchOptions {
                editor_command: "true".to_string(),
                terminal_app: "true".to_string(),
                restart_delay: Duration::from_millis(1),
            },
        );
        // pkill finds nothing to quit and exits 1
        launcher
            .perform(&LaunchAction::RestartApplication("true".to_string()))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_an_error() {
        let command = LaunchCommand::new("false", Vec::<String>::new());
        assert!(run_command(&command).is_err());
        let command = LaunchCommand::new("true", Vec::<String>::new());
        assert!(run_command(&command).is_ok());
    }
}
