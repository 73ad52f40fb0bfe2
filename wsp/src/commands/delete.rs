use wsp_core::error::Result;
use wsp_core::{wsp_info, wsp_success};
use wsp_messages::{msg, MESSAGES};
use wsp_orchestrator::{DeleteOutcome, WorkspaceManager};

pub fn handle_delete(manager: &WorkspaceManager<'_>, name: &str, force: bool) -> Result<()> {
    match manager.delete(name, force)? {
        DeleteOutcome::Deleted => wsp_success!("{}", msg!(MESSAGES.workspace.deleted, name = name)),
        DeleteOutcome::Cancelled => wsp_info!("{}", MESSAGES.workspace.delete_cancelled),
    }
    Ok(())
}
