use crate::cli::CreateArgs;
use wsp_config::{ApplicationConfig, McpSource, SkippedServer};
use wsp_core::error::Result;
use wsp_core::validation::{split_csv, validate_workspace_name};
use wsp_core::{wsp_info, wsp_success, wsp_warning};
use wsp_messages::{msg, MESSAGES};
use wsp_orchestrator::{CreateRequest, WorkspaceFields, WorkspaceManager};

pub fn handle_create(manager: &WorkspaceManager<'_>, args: CreateArgs) -> Result<()> {
    validate_workspace_name(&args.name)?;
    let ws = &MESSAGES.workspace;

    let request = if let Some(template) = &args.template {
        CreateRequest::from_template(&args.name, template)
    } else if args.interactive {
        wsp_info!("{}", msg!(ws.interactive_header, name = &args.name));
        CreateRequest::interactive(&args.name)
    } else {
        CreateRequest::with_fields(&args.name, fields_from_args(&args))
    };
    let request = request.forced(args.force);

    let outcome = manager.create(request)?;

    if outcome.replaced {
        wsp_warning!("{}", msg!(ws.create_force_overwrite, name = &args.name));
    }
    report_skipped(&outcome.skipped_mcp);
    if let Some(servers) = &outcome.workspace.mcp_servers {
        wsp_info!("{}", msg!(MESSAGES.config.mcp_loaded, count = servers.len().to_string()));
    }

    match &args.template {
        Some(template) => wsp_success!(
            "{}",
            msg!(ws.created_from_template, name = &args.name, template = template)
        ),
        None => wsp_success!("{}", msg!(ws.created, name = &args.name)),
    }
    wsp_info!("{}", msg!(ws.create_switch_hint, name = &args.name));
    Ok(())
}

fn fields_from_args(args: &CreateArgs) -> WorkspaceFields {
    WorkspaceFields {
        applications: args
            .apps
            .as_deref()
            .map(split_csv)
            .unwrap_or_default()
            .into_iter()
            .map(ApplicationConfig::named)
            .collect(),
        browser_urls: args.browser_urls.as_deref().map(split_csv).unwrap_or_default(),
        terminal_directories: args
            .terminal_dirs
            .as_deref()
            .map(split_csv)
            .unwrap_or_default(),
        vscode_workspace: args.vscode_workspace.clone(),
        mcp_source: mcp_source(args.mcp_config.clone(), args.mcp_json.clone()),
    }
}

pub fn mcp_source(
    file: Option<std::path::PathBuf>,
    inline: Option<String>,
) -> Option<McpSource> {
    file.map(McpSource::File).or(inline.map(McpSource::Inline))
}

pub fn report_skipped(skipped: &[SkippedServer]) {
    for entry in skipped {
        wsp_warning!(
            "{}",
            msg!(
                MESSAGES.config.mcp_entry_skipped,
                name = &entry.name,
                reason = &entry.reason
            )
        );
    }
}
