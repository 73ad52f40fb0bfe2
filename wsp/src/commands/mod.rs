// Command handlers for workspace operations

use crate::cli::{Args, Command};
use std::sync::Arc;
use tracing::debug;
use wsp_config::{FileWorkspaceStore, GlobalSettings, McpConfigMerger};
use wsp_core::error::Result;
use wsp_core::user_paths;
use wsp_orchestrator::{DialoguerPrompter, WorkspaceManager};
use wsp_platform::{PlatformProvider, SystemLauncher, SystemSnapshotter};

pub mod completion;
pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod switch;

/// The real collaborators, built from the user's settings.
pub struct Runtime {
    store: FileWorkspaceStore,
    launcher: SystemLauncher,
    merger: McpConfigMerger,
    prompter: DialoguerPrompter,
    snapshotter: SystemSnapshotter,
}

impl Runtime {
    pub fn load() -> Result<Self> {
        let platform: Arc<dyn PlatformProvider> = wsp_platform::current();
        let settings = GlobalSettings::load_default()?;
        debug!(platform = platform.name(), "loaded settings");

        Ok(Self {
            store: FileWorkspaceStore::from_user_home()?,
            launcher: SystemLauncher::new(
                Arc::clone(&platform),
                settings.launch_options(platform.as_ref()),
            ),
            merger: McpConfigMerger::new(settings.mcp_targets(platform.as_ref())?),
            prompter: DialoguerPrompter::new(),
            snapshotter: SystemSnapshotter::new(platform, user_paths::snapshots_dir()?),
        })
    }

    pub fn manager(&self) -> WorkspaceManager<'_> {
        WorkspaceManager::new(
            &self.store,
            &self.launcher,
            &self.merger,
            &self.prompter,
            &self.snapshotter,
        )
    }
}

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> Result<()> {
    if let Command::Completion { shell } = &args.command {
        debug!("Handling completion command");
        completion::handle_completion(*shell);
        return Ok(());
    }

    let runtime = Runtime::load()?;
    let manager = runtime.manager();

    match args.command {
        Command::Create(create_args) => {
            debug!("Handling create command");
            create::handle_create(&manager, create_args)
        }
        Command::Switch { name, save, force } => {
            debug!("Handling switch command");
            switch::handle_switch(&manager, &name, save, force)
        }
        Command::List => list::handle_list(&manager),
        Command::Show { name } => list::handle_show(&manager, &name),
        Command::Config(config_args) => {
            debug!("Handling config command");
            config::handle_config(&manager, config_args)
        }
        Command::Delete { name, force } => delete::handle_delete(&manager, &name, force),
        Command::Completion { .. } => Ok(()),
    }
}
