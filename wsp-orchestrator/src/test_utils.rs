//! In-memory collaborators for exercising the workspace manager.

use anyhow::anyhow;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use wsp_config::{
    McpMerge, McpServerConfig, MergeReport, MergeStatus, TargetOutcome, Workspace, WorkspaceStore,
};
use wsp_core::error::{Result, WspError};
use wsp_core::validation::validate_workspace_name;
use wsp_platform::{LaunchAction, Launcher, Snapshotter};

use crate::prompt::Prompter;

#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<String, Workspace>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(workspaces: impl IntoIterator<Item = Workspace>) -> Self {
        let store = Self::new();
        for workspace in workspaces {
            store
                .records
                .borrow_mut()
                .insert(workspace.name.clone(), workspace);
        }
        store
    }

    /// Number of `save` calls since construction.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl WorkspaceStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.records.borrow().contains_key(name)
    }

    fn load(&self, name: &str) -> Result<Workspace> {
        self.records
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| {
                WspError::not_found(name, self.records.borrow().keys().cloned().collect())
            })
    }

    fn save(&self, workspace: &Workspace) -> Result<()> {
        validate_workspace_name(&workspace.name)?;
        *self.saves.borrow_mut() += 1;
        self.records
            .borrow_mut()
            .insert(workspace.name.clone(), workspace.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.records.borrow().keys().cloned().collect())
    }

    fn delete(&self, name: &str) -> Result<()> {
        if self.records.borrow_mut().remove(name).is_none() {
            return Err(WspError::not_found(name, self.list()?));
        }
        Ok(())
    }
}

/// Records every action; fails those whose target is listed.
#[derive(Default)]
pub struct RecordingLauncher {
    performed: RefCell<Vec<LaunchAction>>,
    failing_targets: Vec<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            performed: RefCell::default(),
            failing_targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn performed(&self) -> Vec<LaunchAction> {
        self.performed.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn perform(&self, action: &LaunchAction) -> anyhow::Result<()> {
        self.performed.borrow_mut().push(action.clone());
        if self.failing_targets.contains(&action.target()) {
            return Err(anyhow!("simulated failure for '{}'", action.target()));
        }
        Ok(())
    }
}

/// Answers prompts from queues. An exhausted confirm queue answers "no" and
/// an exhausted input queue answers with an empty string.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    inputs: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(answers: impl IntoIterator<Item = bool>) -> Self {
        let prompter = Self::new();
        prompter.confirms.borrow_mut().extend(answers);
        prompter
    }

    pub fn with_inputs<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs
            .borrow_mut()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    /// Every prompt shown, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(false))
    }

    fn input(&self, message: &str) -> Result<String> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.inputs.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Reports the configured targets as updated and records what it was given.
#[derive(Default)]
pub struct RecordingMerger {
    updated_targets: Vec<String>,
    calls: RefCell<Vec<IndexMap<String, McpServerConfig>>>,
}

impl RecordingMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updating<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            updated_targets: targets.into_iter().map(Into::into).collect(),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<IndexMap<String, McpServerConfig>> {
        self.calls.borrow().clone()
    }
}

impl McpMerge for RecordingMerger {
    fn merge(&self, servers: &IndexMap<String, McpServerConfig>) -> MergeReport {
        self.calls.borrow_mut().push(servers.clone());
        MergeReport {
            outcomes: self
                .updated_targets
                .iter()
                .map(|target| TargetOutcome {
                    target: target.clone(),
                    path: PathBuf::from(format!("/fake/{}/config.json", target)),
                    status: MergeStatus::Updated { backup: None },
                })
                .collect(),
        }
    }
}

pub struct FakeSnapshotter {
    result: std::result::Result<PathBuf, String>,
    captures: RefCell<usize>,
}

impl FakeSnapshotter {
    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            result: Ok(path.into()),
            captures: RefCell::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            captures: RefCell::new(0),
        }
    }

    pub fn captures(&self) -> usize {
        *self.captures.borrow()
    }
}

impl Default for FakeSnapshotter {
    fn default() -> Self {
        Self::saving_to("/fake/snapshot.json")
    }
}

impl Snapshotter for FakeSnapshotter {
    fn capture(&self) -> anyhow::Result<PathBuf> {
        *self.captures.borrow_mut() += 1;
        self.result.clone().map_err(|reason| anyhow!(reason))
    }
}
