//! Inputs to the workspace manager's operations.

use wsp_config::{ApplicationConfig, McpSource};

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub name: String,
    /// Overwrite an existing record with the same name.
    pub force: bool,
    pub mode: CreateMode,
}

/// How the new workspace's fields are obtained. Template mode never combines
/// with explicit fields.
#[derive(Debug, Clone)]
pub enum CreateMode {
    /// Clone every field of an existing workspace.
    Template(String),
    /// Ask for each field through the prompter.
    Interactive,
    Fields(WorkspaceFields),
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceFields {
    pub applications: Vec<ApplicationConfig>,
    pub browser_urls: Vec<String>,
    pub terminal_directories: Vec<String>,
    pub vscode_workspace: Option<String>,
    pub mcp_source: Option<McpSource>,
}

impl CreateRequest {
    pub fn blank(name: impl Into<String>) -> Self {
        Self::with_fields(name, WorkspaceFields::default())
    }

    pub fn with_fields(name: impl Into<String>, fields: WorkspaceFields) -> Self {
        Self {
            name: name.into(),
            force: false,
            mode: CreateMode::Fields(fields),
        }
    }

    pub fn from_template(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            force: false,
            mode: CreateMode::Template(template.into()),
        }
    }

    pub fn interactive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            force: false,
            mode: CreateMode::Interactive,
        }
    }

    pub fn forced(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Fields to replace. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceUpdate {
    /// An empty string clears the editor project.
    pub vscode_workspace: Option<String>,
    pub browser_urls: Option<Vec<String>>,
    pub terminal_directories: Option<Vec<String>>,
    pub mcp_source: Option<McpSource>,
}

impl WorkspaceUpdate {
    pub fn is_empty(&self) -> bool {
        self.vscode_workspace.is_none()
            && self.browser_urls.is_none()
            && self.terminal_directories.is_none()
            && self.mcp_source.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchOptions {
    /// Capture the running state before anything is launched.
    pub save_current_state: bool,
    /// Skip the confirmation prompt.
    pub force: bool,
}
