use wsp_core::error::Result;
use wsp_core::{wsp_info, wsp_println};
use wsp_messages::{msg, MESSAGES};
use wsp_orchestrator::WorkspaceManager;

pub fn handle_list(manager: &WorkspaceManager<'_>) -> Result<()> {
    let names = manager.list()?;
    if names.is_empty() {
        wsp_info!("{}", MESSAGES.workspace.list_empty);
        return Ok(());
    }

    wsp_println!("{}", MESSAGES.workspace.list_header);
    for name in names {
        wsp_println!("{}", msg!(MESSAGES.workspace.list_row, name = name));
    }
    Ok(())
}

pub fn handle_show(manager: &WorkspaceManager<'_>, name: &str) -> Result<()> {
    let workspace = manager.get(name)?;
    wsp_println!("{}", serde_json::to_string_pretty(&workspace)?);
    Ok(())
}
