//! Workspace records and the configuration files wsp reads and writes.
//!
//! - [`workspace`]: the persisted data model
//! - [`store`]: one JSON record per workspace
//! - [`mcp`]: permissive parsing of MCP server definitions
//! - [`merge`]: distributing MCP servers into third-party configs
//! - [`settings`]: the tool-wide `settings.yaml`

pub mod mcp;
pub mod merge;
pub mod settings;
pub mod store;
pub mod workspace;

pub use mcp::{load_mcp_servers, McpParseReport, McpSource, SkippedServer};
pub use merge::{McpConfigMerger, McpMerge, MergeReport, MergeStatus, TargetOutcome};
pub use settings::GlobalSettings;
pub use store::{FileWorkspaceStore, WorkspaceStore};
pub use workspace::{ApplicationConfig, McpServerConfig, WindowPosition, Workspace};
