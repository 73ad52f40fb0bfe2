//! Results returned by the workspace manager.

use std::path::PathBuf;
use wsp_config::{MergeReport, SkippedServer, Workspace};
use wsp_core::WspError;
use wsp_platform::LaunchAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub workspace: Workspace,
    /// A previous record with the same name was overwritten.
    pub replaced: bool,
    pub skipped_mcp: Vec<SkippedServer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing was supplied, or every supplied value matched the stored one.
    Unchanged { skipped_mcp: Vec<SkippedServer> },
    Updated {
        workspace: Workspace,
        /// Record keys that changed, in the order they were applied.
        changed_fields: Vec<&'static str>,
        skipped_mcp: Vec<SkippedServer>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    Completed(SwitchReport),
    /// The user declined the confirmation; nothing was done.
    Cancelled,
}

/// One launch action and how it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub action: LaunchAction,
    pub error: Option<String>,
}

impl StepResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotResult {
    NotRequested,
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartDecision {
    /// No MCP target was updated, so nothing needs restarting.
    NotNeeded,
    Restarted(Vec<StepResult>),
    /// The user chose to restart these targets by hand.
    Declined(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub workspace: Workspace,
    pub snapshot: SnapshotResult,
    /// Apply steps in execution order.
    pub steps: Vec<StepResult>,
    /// `None` when the workspace declares no MCP servers.
    pub merge: Option<MergeReport>,
    pub restart: RestartDecision,
}

impl SwitchReport {
    fn launch_results(&self) -> impl Iterator<Item = &StepResult> {
        let restarts: &[StepResult] = match &self.restart {
            RestartDecision::Restarted(results) => results.as_slice(),
            _ => &[],
        };
        self.steps.iter().chain(restarts)
    }

    pub fn failed_steps(&self) -> Vec<&StepResult> {
        self.launch_results()
            .filter(|step| !step.succeeded())
            .collect()
    }

    /// `PartialApply` when at least one launch step failed. Never fatal.
    pub fn partial_failure(&self) -> Option<WspError> {
        let total = self.launch_results().count();
        let failed = self.failed_steps().len();
        (failed > 0).then_some(WspError::PartialApply { failed, total })
    }
}
