//! Workspace lifecycle messages (create, list, show, delete)

pub struct WorkspaceMessages {
    // ============================================================================
    // Create
    // ============================================================================
    pub created: &'static str,
    pub created_from_template: &'static str,
    pub create_force_overwrite: &'static str,
    pub create_switch_hint: &'static str,
    pub interactive_header: &'static str,
    pub interactive_apps_prompt: &'static str,
    pub interactive_bundle_prompt: &'static str,
    pub interactive_editor_prompt: &'static str,
    pub interactive_mcp_prompt: &'static str,
    pub interactive_terminal_prompt: &'static str,
    pub interactive_urls_prompt: &'static str,

    // ============================================================================
    // Lookup
    // ============================================================================
    pub already_exists_hint: &'static str,
    pub available_label: &'static str,
    pub none_available: &'static str,
    pub not_found: &'static str,

    // ============================================================================
    // List / Show
    // ============================================================================
    pub list_empty: &'static str,
    pub list_header: &'static str,
    pub list_row: &'static str,

    // ============================================================================
    // Delete
    // ============================================================================
    pub delete_cancelled: &'static str,
    pub delete_confirm: &'static str,
    pub deleted: &'static str,
}

pub const WORKSPACE_MESSAGES: WorkspaceMessages = WorkspaceMessages {
    created: "Workspace '{name}' created",
    created_from_template: "Workspace '{name}' created from template '{template}'",
    create_force_overwrite: "Overwriting existing workspace '{name}'",
    create_switch_hint: "Switch to it: wsp switch {name}",
    interactive_header: "Configuring workspace '{name}' (leave blank to skip)",
    interactive_apps_prompt: "Applications to launch (comma-separated)",
    interactive_bundle_prompt: "Bundle identifier for {app} (optional)",
    interactive_editor_prompt: "VS Code workspace path",
    interactive_mcp_prompt: "MCP servers JSON",
    interactive_terminal_prompt: "Terminal directories (comma-separated)",
    interactive_urls_prompt: "Browser URLs (comma-separated)",

    already_exists_hint: "Use --force to overwrite it, or pick another name",
    available_label: "Available workspaces: {names}",
    none_available: "No workspaces exist yet. Create one with: wsp create <name>",
    not_found: "Workspace '{name}' not found",

    list_empty: "No workspaces found. Create one with: wsp create <name>",
    list_header: "📋 Workspaces:",
    list_row: "  • {name}",

    delete_cancelled: "Delete cancelled",
    delete_confirm: "Delete workspace '{name}'?",
    deleted: "Workspace '{name}' deleted",
};
