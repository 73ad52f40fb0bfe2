use crate::cli::ConfigArgs;
use crate::commands::create::{mcp_source, report_skipped};
use wsp_core::error::Result;
use wsp_core::validation::split_csv;
use wsp_core::{wsp_info, wsp_println, wsp_success};
use wsp_messages::{msg, MESSAGES};
use wsp_orchestrator::{UpdateOutcome, WorkspaceManager, WorkspaceUpdate};

pub fn handle_config(manager: &WorkspaceManager<'_>, args: ConfigArgs) -> Result<()> {
    let update = WorkspaceUpdate {
        vscode_workspace: args.vscode_workspace,
        browser_urls: args.browser_urls.as_deref().map(split_csv),
        terminal_directories: args.terminal_dirs.as_deref().map(split_csv),
        mcp_source: mcp_source(args.mcp_config, args.mcp_json),
    };

    match manager.update(&args.name, update)? {
        UpdateOutcome::Unchanged { skipped_mcp } => {
            report_skipped(&skipped_mcp);
            wsp_info!("{}", msg!(MESSAGES.config.no_changes, name = &args.name));
        }
        UpdateOutcome::Updated {
            changed_fields,
            skipped_mcp,
            ..
        } => {
            report_skipped(&skipped_mcp);
            wsp_success!("{}", msg!(MESSAGES.config.updated, name = &args.name));
            for field in changed_fields {
                wsp_println!("{}", msg!(MESSAGES.config.changed_field, field = field));
            }
        }
    }
    Ok(())
}
