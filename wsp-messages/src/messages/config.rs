//! Configuration update and MCP input messages

pub struct ConfigMessages {
    pub changed_field: &'static str,
    pub no_changes: &'static str,
    pub updated: &'static str,
    pub mcp_entry_skipped: &'static str,
    pub mcp_loaded: &'static str,
}

pub const CONFIG_MESSAGES: ConfigMessages = ConfigMessages {
    changed_field: "   • {field}",
    no_changes: "No changes made to workspace '{name}'",
    updated: "Workspace '{name}' updated:",
    mcp_entry_skipped: "Skipped MCP server '{name}': {reason}",
    mcp_loaded: "Loaded {count} MCP server(s)",
};
