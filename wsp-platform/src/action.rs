//! Structured descriptions of launch side effects.
//!
//! The manager never builds command strings. It hands a [`LaunchAction`] to a
//! [`crate::Launcher`], and platform providers translate that into argument
//! vectors ([`LaunchCommand`]) that are executed without a shell.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// One side effect requested by the workspace manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    LaunchApplication {
        name: String,
        /// Platform application identifier, preferred over `name` when present.
        bundle_identifier: Option<String>,
        /// Browser profile to open; only set for known browsers.
        browser_profile: Option<String>,
    },
    OpenUrl(String),
    OpenTerminal(PathBuf),
    OpenEditorProject(PathBuf),
    /// Quit, pause, relaunch.
    RestartApplication(String),
}

impl LaunchAction {
    /// Short label for the kind of action, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchAction::LaunchApplication { .. } => "launch application",
            LaunchAction::OpenUrl(_) => "open URL",
            LaunchAction::OpenTerminal(_) => "open terminal",
            LaunchAction::OpenEditorProject(_) => "open editor project",
            LaunchAction::RestartApplication(_) => "restart application",
        }
    }

    /// The thing being acted on (application name, URL or path).
    pub fn target(&self) -> String {
        match self {
            LaunchAction::LaunchApplication { name, .. } => name.clone(),
            LaunchAction::OpenUrl(url) => url.clone(),
            LaunchAction::OpenTerminal(path) | LaunchAction::OpenEditorProject(path) => {
                path.display().to_string()
            }
            LaunchAction::RestartApplication(name) => name.clone(),
        }
    }
}

/// A program invocation with an explicit argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
    /// Wait for the program to exit. GUI programs spawned directly are left
    /// running instead.
    pub wait: bool,
    /// Non-zero exit codes that still count as success.
    pub accepted_exit_codes: Vec<i32>,
}

impl LaunchCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
            wait: true,
            accepted_exit_codes: Vec::new(),
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn detached(mut self) -> Self {
        self.wait = false;
        self
    }

    /// Treat `code` as a successful exit.
    pub fn accepting_exit_code(mut self, code: i32) -> Self {
        self.accepted_exit_codes.push(code);
        self
    }

    pub fn accepts(&self, status: ExitStatus) -> bool {
        status.success()
            || status
                .code()
                .is_some_and(|code| self.accepted_exit_codes.contains(&code))
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// A single step of an executable plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchStep {
    Run(LaunchCommand),
    Pause(Duration),
}

/// User-tunable launch behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Editor CLI used for `OpenEditorProject`.
    pub editor_command: String,
    /// Terminal application used for `OpenTerminal`.
    pub terminal_app: String,
    pub restart_delay: Duration,
}
