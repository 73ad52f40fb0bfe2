//! Folding a workspace's MCP servers into third-party application configs.
//!
//! Only the `mcpServers` key of each target document is replaced; every other
//! key keeps its value and position. An existing file is copied to a sibling
//! `.backup` before it is touched.

use crate::store::write_atomically;
use crate::workspace::{servers_to_external_value, McpServerConfig};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use wsp_platform::McpTargetSpec;

pub const MCP_SERVERS_KEY: &str = "mcpServers";
pub const BACKUP_SUFFIX: &str = "backup";

/// Distributes MCP server definitions to every known target.
pub trait McpMerge {
    fn merge(&self, servers: &IndexMap<String, McpServerConfig>) -> MergeReport;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeStatus {
    /// The file was written; `backup` is set when a previous file existed.
    Updated { backup: Option<PathBuf> },
    /// The application's configuration directory does not exist.
    NotInstalled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: String,
    pub path: PathBuf,
    pub status: MergeStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl MergeReport {
    /// Names of targets whose config file was written.
    pub fn updated_targets(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, MergeStatus::Updated { .. }))
            .map(|outcome| outcome.target.as_str())
            .collect()
    }

    pub fn failed(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, MergeStatus::Failed(_)))
    }
}

pub struct McpConfigMerger {
    targets: Vec<McpTargetSpec>,
}

impl McpConfigMerger {
    pub fn new(targets: Vec<McpTargetSpec>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[McpTargetSpec] {
        &self.targets
    }

    fn merge_target(
        &self,
        target: &McpTargetSpec,
        servers: &IndexMap<String, McpServerConfig>,
    ) -> MergeStatus {
        let path = &target.config_path;
        let installed = target.config_dir().is_some_and(Path::is_dir);
        if !installed {
            debug!(app = %target.name, path = %path.display(), "target not installed");
            return MergeStatus::NotInstalled;
        }

        let (document, backup) = if path.is_file() {
            let backup = backup_path(path);
            if let Err(e) = fs::copy(path, &backup) {
                return MergeStatus::Failed(format!(
                    "could not back up to '{}': {}",
                    backup.display(),
                    e
                ));
            }
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => return MergeStatus::Failed(format!("could not read: {}", e)),
            };
            match serde_json::from_str::<Value>(&content) {
                Ok(document) => (document, Some(backup)),
                Err(e) => return MergeStatus::Failed(format!("could not parse: {}", e)),
            }
        } else {
            (Value::Object(Map::new()), None)
        };

        let merged = match merge_into_document(document, servers) {
            Ok(merged) => merged,
            Err(reason) => return MergeStatus::Failed(reason),
        };

        let written = serde_json::to_string_pretty(&merged)
            .map_err(|e| e.to_string())
            .and_then(|json| write_atomically(path, json.as_bytes()).map_err(|e| e.to_string()));
        match written {
            Ok(()) => {
                info!(app = %target.name, path = %path.display(), "merged MCP servers");
                MergeStatus::Updated { backup }
            }
            Err(reason) => MergeStatus::Failed(reason),
        }
    }
}

impl McpMerge for McpConfigMerger {
    fn merge(&self, servers: &IndexMap<String, McpServerConfig>) -> MergeReport {
        let outcomes = self
            .targets
            .iter()
            .map(|target| {
                let status = self.merge_target(target, servers);
                if let MergeStatus::Failed(reason) = &status {
                    warn!(app = %target.name, %reason, "MCP merge failed");
                }
                TargetOutcome {
                    target: target.name.clone(),
                    path: target.config_path.clone(),
                    status,
                }
            })
            .collect();
        MergeReport { outcomes }
    }
}

/// `<file>.backup` next to the original.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Replace `mcpServers` in `document` wholesale, keeping every other key.
pub fn merge_into_document(
    document: Value,
    servers: &IndexMap<String, McpServerConfig>,
) -> Result<Value, String> {
    let Value::Object(mut map) = document else {
        return Err("existing config is not a JSON object".to_string());
    };
    map.insert(MCP_SERVERS_KEY.to_string(), servers_to_external_value(servers));
    Ok(Value::Object(map))
}
