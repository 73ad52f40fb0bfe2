//! The workspace manager: create, update, switch and delete.
//!
//! The manager owns no state. Every collaborator is borrowed, so the binary
//! wires in the real store, launcher and merger while tests pass fakes.

use crate::prompt::Prompter;
use crate::report::{
    CreateOutcome, DeleteOutcome, RestartDecision, SnapshotResult, StepResult, SwitchOutcome,
    SwitchReport, UpdateOutcome,
};
use crate::request::{CreateMode, CreateRequest, SwitchOptions, WorkspaceFields, WorkspaceUpdate};
use serde_json::Value;
use tracing::{debug, info, warn};
use wsp_config::mcp::parse_mcp_document;
use wsp_config::{
    load_mcp_servers, ApplicationConfig, McpMerge, SkippedServer, Workspace, WorkspaceStore,
};
use wsp_core::error::{Result, WspError};
use wsp_core::user_paths::expand_tilde;
use wsp_core::validation::{split_csv, validate_workspace_name};
use wsp_messages::{msg, MESSAGES};
use wsp_platform::{LaunchAction, Launcher, Snapshotter};

/// Name reported for an interactive MCP blob that is not valid JSON at all.
const INTERACTIVE_MCP_INPUT: &str = "<interactive input>";

pub struct WorkspaceManager<'a> {
    store: &'a dyn WorkspaceStore,
    launcher: &'a dyn Launcher,
    merger: &'a dyn McpMerge,
    prompter: &'a dyn Prompter,
    snapshotter: &'a dyn Snapshotter,
}

impl<'a> WorkspaceManager<'a> {
    pub fn new(
        store: &'a dyn WorkspaceStore,
        launcher: &'a dyn Launcher,
        merger: &'a dyn McpMerge,
        prompter: &'a dyn Prompter,
        snapshotter: &'a dyn Snapshotter,
    ) -> Self {
        Self {
            store,
            launcher,
            merger,
            prompter,
            snapshotter,
        }
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    pub fn get(&self, name: &str) -> Result<Workspace> {
        self.store.load(name)
    }

    pub fn create(&self, request: CreateRequest) -> Result<CreateOutcome> {
        let CreateRequest { name, force, mode } = request;
        validate_workspace_name(&name)?;

        let replaced = self.store.exists(&name);
        if replaced && !force {
            return Err(WspError::AlreadyExists(name));
        }

        let (workspace, skipped_mcp) = match mode {
            CreateMode::Template(template) => {
                let source = self.store.load(&template)?;
                debug!(workspace = %name, %template, "cloning template");
                (source.renamed(name.as_str()), Vec::new())
            }
            CreateMode::Interactive => self.collect_interactive(&name)?,
            CreateMode::Fields(fields) => build_from_fields(&name, fields)?,
        };

        self.store.save(&workspace)?;
        info!(workspace = %workspace.name, replaced, "workspace created");
        Ok(CreateOutcome {
            workspace,
            replaced,
            skipped_mcp,
        })
    }

    fn collect_interactive(&self, name: &str) -> Result<(Workspace, Vec<SkippedServer>)> {
        let ws = &MESSAGES.workspace;
        let mut workspace = Workspace::new(name);

        let editor = self.prompter.input(ws.interactive_editor_prompt)?;
        workspace.vscode_workspace = non_empty(editor);
        workspace.browser_urls = split_csv(&self.prompter.input(ws.interactive_urls_prompt)?);
        workspace.terminal_directories =
            split_csv(&self.prompter.input(ws.interactive_terminal_prompt)?);

        for app in split_csv(&self.prompter.input(ws.interactive_apps_prompt)?) {
            let bundle = self
                .prompter
                .input(&msg!(ws.interactive_bundle_prompt, app = &app))?;
            let mut config = ApplicationConfig::named(app);
            config.bundle_identifier = non_empty(bundle);
            workspace.applications.push(config);
        }

        let mut skipped = Vec::new();
        let blob = self.prompter.input(ws.interactive_mcp_prompt)?;
        if !blob.is_empty() {
            let parsed = serde_json::from_str::<Value>(&blob)
                .map_err(|e| e.to_string())
                .and_then(|document| parse_mcp_document(&document));
            match parsed {
                Ok(report) => {
                    workspace.mcp_servers = Some(report.servers);
                    skipped = report.skipped;
                }
                Err(reason) => {
                    warn!(%reason, "ignoring interactive MCP input");
                    skipped.push(SkippedServer {
                        name: INTERACTIVE_MCP_INPUT.to_string(),
                        reason,
                    });
                }
            }
        }

        Ok((workspace, skipped))
    }

    pub fn update(&self, name: &str, update: WorkspaceUpdate) -> Result<UpdateOutcome> {
        let mut workspace = self.store.load(name)?;
        if update.is_empty() {
            return Ok(UpdateOutcome::Unchanged {
                skipped_mcp: Vec::new(),
            });
        }

        let mut changed_fields = Vec::new();
        let mut skipped_mcp = Vec::new();

        if let Some(path) = update.vscode_workspace {
            let path = non_empty(path);
            if workspace.vscode_workspace != path {
                workspace.vscode_workspace = path;
                changed_fields.push("vscodeWorkspace");
            }
        }
        if let Some(urls) = update.browser_urls {
            if workspace.browser_urls != urls {
                workspace.browser_urls = urls;
                changed_fields.push("browserUrls");
            }
        }
        if let Some(dirs) = update.terminal_directories {
            if workspace.terminal_directories != dirs {
                workspace.terminal_directories = dirs;
                changed_fields.push("terminalDirectories");
            }
        }
        if let Some(source) = update.mcp_source {
            let report = load_mcp_servers(&source)?;
            skipped_mcp = report.skipped;
            let servers = Some(report.servers);
            if workspace.mcp_servers != servers {
                workspace.mcp_servers = servers;
                changed_fields.push("mcpServers");
            }
        }

        if changed_fields.is_empty() {
            debug!(workspace = %name, "update matched stored values");
            return Ok(UpdateOutcome::Unchanged { skipped_mcp });
        }

        self.store.save(&workspace)?;
        info!(workspace = %name, fields = ?changed_fields, "workspace updated");
        Ok(UpdateOutcome::Updated {
            workspace,
            changed_fields,
            skipped_mcp,
        })
    }

    pub fn delete(&self, name: &str, force: bool) -> Result<DeleteOutcome> {
        validate_workspace_name(name)?;
        if !self.store.exists(name) {
            return Err(WspError::not_found(name, self.store.list()?));
        }
        if !force
            && !self
                .prompter
                .confirm(&msg!(MESSAGES.workspace.delete_confirm, name = name))?
        {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.store.delete(name)?;
        info!(workspace = %name, "workspace deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Apply a workspace to the current environment.
    ///
    /// Only a missing record or a failed confirmation prompt is an error.
    /// Launch steps, the snapshot and each MCP target are best-effort and
    /// their outcomes are collected in the report.
    pub fn switch(&self, name: &str, options: SwitchOptions) -> Result<SwitchOutcome> {
        let workspace = self.store.load(name)?;

        if !options.force
            && !self
                .prompter
                .confirm(&msg!(MESSAGES.switch.confirm, name = name))?
        {
            info!(workspace = %name, "switch cancelled");
            return Ok(SwitchOutcome::Cancelled);
        }

        let snapshot = if options.save_current_state {
            match self.snapshotter.capture() {
                Ok(path) => SnapshotResult::Saved(path),
                Err(e) => {
                    warn!(error = %e, "could not capture current state");
                    SnapshotResult::Failed(e.to_string())
                }
            }
        } else {
            SnapshotResult::NotRequested
        };

        let steps = apply_actions(&workspace)
            .into_iter()
            .map(|action| self.perform(action))
            .collect();

        let merge = workspace
            .active_mcp_servers()
            .map(|servers| self.merger.merge(servers));
        let restart = match &merge {
            Some(report) => self.offer_restart(&report.updated_targets()),
            None => RestartDecision::NotNeeded,
        };

        info!(workspace = %name, "switch completed");
        Ok(SwitchOutcome::Completed(SwitchReport {
            workspace,
            snapshot,
            steps,
            merge,
            restart,
        }))
    }

    fn perform(&self, action: LaunchAction) -> StepResult {
        let error = match self.launcher.perform(&action) {
            Ok(()) => None,
            Err(e) => {
                warn!(action = action.kind(), subject = %action.target(), error = %e, "step failed");
                Some(format!("{:#}", e))
            }
        };
        StepResult { action, error }
    }

    fn offer_restart(&self, updated: &[&str]) -> RestartDecision {
        if updated.is_empty() {
            return RestartDecision::NotNeeded;
        }
        let targets = updated.join(", ");
        let accepted = match self
            .prompter
            .confirm(&msg!(MESSAGES.switch.restart_prompt, targets = &targets))
        {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "restart prompt failed");
                false
            }
        };

        if !accepted {
            return RestartDecision::Declined(updated.iter().map(|t| t.to_string()).collect());
        }
        RestartDecision::Restarted(
            updated
                .iter()
                .map(|target| self.perform(LaunchAction::RestartApplication(target.to_string())))
                .collect(),
        )
    }
}

/// The apply sequence in its fixed order: applications, URLs, terminals,
/// editor project.
pub fn apply_actions(workspace: &Workspace) -> Vec<LaunchAction> {
    let applications = workspace
        .applications
        .iter()
        .map(|app| LaunchAction::LaunchApplication {
            name: app.name.clone(),
            bundle_identifier: app.bundle_identifier.clone(),
            browser_profile: app.browser_profile().map(str::to_string),
        });
    let urls = workspace
        .browser_urls
        .iter()
        .map(|url| LaunchAction::OpenUrl(url.clone()));
    let terminals = workspace
        .terminal_directories
        .iter()
        .map(|dir| LaunchAction::OpenTerminal(expand_tilde(dir)));
    let editor = workspace
        .vscode_workspace
        .iter()
        .map(|path| LaunchAction::OpenEditorProject(expand_tilde(path)));

    applications.chain(urls).chain(terminals).chain(editor).collect()
}

fn build_from_fields(
    name: &str,
    fields: WorkspaceFields,
) -> Result<(Workspace, Vec<SkippedServer>)> {
    let (mcp_servers, skipped) = match &fields.mcp_source {
        Some(source) => {
            let report = load_mcp_servers(source)?;
            (Some(report.servers), report.skipped)
        }
        None => (None, Vec::new()),
    };

    let workspace = Workspace {
        name: name.to_string(),
        applications: fields.applications,
        browser_urls: fields.browser_urls,
        terminal_directories: fields.terminal_directories,
        vscode_workspace: fields.vscode_workspace.and_then(non_empty),
        mcp_servers,
    };
    Ok((workspace, skipped))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_apply_actions_follow_fixed_order() {
        let mut workspace = Workspace::new("order");
        workspace.vscode_workspace = Some("/w/app.code-workspace".to_string());
        workspace.terminal_directories = vec!["/src".to_string()];
        workspace.browser_urls = vec!["https://a.test".to_string()];
        workspace.applications = vec![ApplicationConfig::named("Slack")];

        let kinds: Vec<_> = apply_actions(&workspace)
            .iter()
            .map(LaunchAction::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                "launch application",
                "open URL",
                "open terminal",
                "open editor project"
            ]
        );
    }

    #[test]
    fn test_apply_actions_pass_profile_only_for_safari() {
        let mut safari = ApplicationConfig::named("Safari");
        safari.safari_profile = Some("Work".to_string());
        let mut slack = ApplicationConfig::named("Slack");
        slack.safari_profile = Some("Work".to_string());

        let mut workspace = Workspace::new("profiles");
        workspace.applications = vec![safari, slack];

        let actions = apply_actions(&workspace);
        assert!(matches!(
            &actions[0],
            LaunchAction::LaunchApplication { browser_profile: Some(p), .. } if p == "Work"
        ));
        assert!(matches!(
            &actions[1],
            LaunchAction::LaunchApplication { browser_profile: None, .. }
        ));
    }

    #[test]
    fn test_absolute_terminal_path_is_kept() {
        let mut workspace = Workspace::new("abs");
        workspace.terminal_directories = vec!["/opt/project".to_string()];
        assert_eq!(
            apply_actions(&workspace),
            vec![LaunchAction::OpenTerminal(PathBuf::from("/opt/project"))]
        );
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" a ".to_string()), Some("a".to_string()));
    }
}
