// CLI argument parsing and definitions

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wsp")]
#[command(about = "Save named desktop workspaces and switch between them")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a workspace
    Create(CreateArgs),

    /// Apply a workspace: launch its apps, URLs, terminals and editor project
    Switch {
        /// Workspace name
        name: String,
        /// Save the currently running applications before switching
        #[arg(long)]
        save: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List workspaces
    List,

    /// Print a workspace record as JSON
    Show {
        /// Workspace name
        name: String,
    },

    /// Replace fields of an existing workspace
    Config(ConfigArgs),

    /// Delete a workspace
    Delete {
        /// Workspace name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Subcommand name, recorded on the request span.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create(_) => "create",
            Command::Switch { .. } => "switch",
            Command::List => "list",
            Command::Show { .. } => "show",
            Command::Config(_) => "config",
            Command::Delete { .. } => "delete",
            Command::Completion { .. } => "completion",
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CreateArgs {
    /// Workspace name
    pub name: String,

    /// Copy every field from an existing workspace
    #[arg(long, conflicts_with_all = [
        "vscode_workspace", "browser_urls", "terminal_dirs", "apps", "mcp_config", "mcp_json",
        "interactive"
    ])]
    pub template: Option<String>,

    /// VS Code workspace file to open
    #[arg(long)]
    pub vscode_workspace: Option<String>,

    /// Comma-separated URLs to open
    #[arg(long)]
    pub browser_urls: Option<String>,

    /// Comma-separated directories to open terminals in
    #[arg(long)]
    pub terminal_dirs: Option<String>,

    /// Comma-separated application names to launch
    #[arg(long)]
    pub apps: Option<String>,

    /// JSON file with MCP server definitions
    #[arg(long, conflicts_with = "mcp_json")]
    pub mcp_config: Option<PathBuf>,

    /// Inline JSON with MCP server definitions
    #[arg(long)]
    pub mcp_json: Option<String>,

    /// Prompt for each field
    #[arg(short, long, conflicts_with_all = [
        "vscode_workspace", "browser_urls", "terminal_dirs", "apps", "mcp_config", "mcp_json"
    ])]
    pub interactive: bool,

    /// Overwrite an existing workspace with the same name
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ConfigArgs {
    /// Workspace name
    pub name: String,

    /// VS Code workspace file (empty string clears it)
    #[arg(long)]
    pub vscode_workspace: Option<String>,

    /// Comma-separated URLs, replacing the current list
    #[arg(long)]
    pub browser_urls: Option<String>,

    /// Comma-separated directories, replacing the current list
    #[arg(long)]
    pub terminal_dirs: Option<String>,

    /// JSON file with MCP server definitions, replacing the current set
    #[arg(long, conflicts_with = "mcp_json")]
    pub mcp_config: Option<PathBuf>,

    /// Inline JSON with MCP server definitions, replacing the current set
    #[arg(long)]
    pub mcp_json: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_template_conflicts_with_fields() {
        let result = Args::try_parse_from([
            "wsp",
            "create",
            "b",
            "--template",
            "a",
            "--browser-urls",
            "https://a.test",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let args = Args::try_parse_from(["wsp", "switch", "demo", "--verbose", "--save"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(
            args.command,
            Command::Switch {
                save: true,
                force: false,
                ..
            }
        ));
    }
}
