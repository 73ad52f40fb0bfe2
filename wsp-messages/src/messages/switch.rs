//! Switch sequence messages

pub struct SwitchMessages {
    pub cancelled: &'static str,
    pub completed: &'static str,
    pub completed_with_failures: &'static str,
    pub confirm: &'static str,
    pub step_failed: &'static str,

    // ============================================================================
    // Snapshot
    // ============================================================================
    pub snapshot_failed: &'static str,
    pub snapshot_saved: &'static str,

    // ============================================================================
    // MCP merge
    // ============================================================================
    pub mcp_target_failed: &'static str,
    pub mcp_target_not_installed: &'static str,
    pub mcp_target_updated: &'static str,

    // ============================================================================
    // Restart
    // ============================================================================
    pub restart_declined: &'static str,
    pub restart_failed: &'static str,
    pub restart_prompt: &'static str,
    pub restarted: &'static str,
}

pub const SWITCH_MESSAGES: SwitchMessages = SwitchMessages {
    cancelled: "Switch cancelled",
    completed: "Switched to workspace '{name}'",
    completed_with_failures: "Switched to workspace '{name}' with {failed} of {total} steps failing",
    confirm: "Switch to workspace '{name}'?",
    step_failed: "{step} '{target}' failed: {error}",

    snapshot_failed: "Could not save current state: {error}",
    snapshot_saved: "Current state saved to {path}",

    mcp_target_failed: "MCP config for {target} not updated: {error}",
    mcp_target_not_installed: "{target} not installed, skipping MCP config",
    mcp_target_updated: "MCP config updated for {target}",

    restart_declined: "Restart {targets} manually to load the new MCP servers",
    restart_failed: "Could not restart {target}: {error}",
    restart_prompt: "Restart {targets} now to apply MCP changes?",
    restarted: "Restarted {target}",
};
