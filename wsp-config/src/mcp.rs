//! Permissive parsing of user-supplied MCP server definitions.
//!
//! Malformed entries are skipped instead of failing the whole document, and
//! every skip is reported back so callers can show it.

use crate::workspace::McpServerConfig;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};
use wsp_core::error::{Result, WspError};

const WRAPPER_KEY: &str = "mcpServers";

/// Where an MCP definition document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpSource {
    File(PathBuf),
    Inline(String),
}

impl McpSource {
    fn describe(&self) -> String {
        match self {
            McpSource::File(path) => format!("MCP config '{}'", path.display()),
            McpSource::Inline(_) => "inline MCP JSON".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            McpSource::File(path) => {
                let path = wsp_core::user_paths::expand_path(path);
                fs::read_to_string(&path).map_err(|e| WspError::filesystem(e, &path, "read"))
            }
            McpSource::Inline(json) => Ok(json.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedServer {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McpParseReport {
    pub servers: IndexMap<String, McpServerConfig>,
    pub skipped: Vec<SkippedServer>,
}

/// Read and parse a source.
pub fn load_mcp_servers(source: &McpSource) -> Result<McpParseReport> {
    let content = source.read()?;
    let document: Value =
        serde_json::from_str(&content).map_err(|e| WspError::parse(source.describe(), e))?;
    parse_mcp_document(&document).map_err(|message| WspError::parse(source.describe(), message))
}

/// Parse an already decoded document. The error string is only produced for a
/// document whose top level is not a mapping.
pub fn parse_mcp_document(document: &Value) -> std::result::Result<McpParseReport, String> {
    let Value::Object(top) = document else {
        return Err(format!(
            "expected a JSON object of MCP servers, found {}",
            json_type_name(document)
        ));
    };

    let entries = match top.get(WRAPPER_KEY) {
        Some(Value::Object(inner)) => inner,
        _ => top,
    };

    let mut report = McpParseReport::default();
    for (name, entry) in entries {
        match parse_entry(entry) {
            Ok(server) => {
                report.servers.insert(name.clone(), server);
            }
            Err(reason) => {
                warn!(server = %name, %reason, "skipping MCP server entry");
                report.skipped.push(SkippedServer {
                    name: name.clone(),
                    reason,
                });
            }
        }
    }
    debug!(
        accepted = report.servers.len(),
        skipped = report.skipped.len(),
        "parsed MCP servers"
    );
    Ok(report)
}

fn parse_entry(entry: &Value) -> std::result::Result<McpServerConfig, String> {
    let Value::Object(fields) = entry else {
        return Err(format!("entry is {}, not an object", json_type_name(entry)));
    };

    let command = match fields.get("command") {
        Some(Value::String(command)) => command.clone(),
        Some(other) => {
            return Err(format!("'command' is {}, not a string", json_type_name(other)))
        }
        None => return Err("missing 'command'".to_string()),
    };
    let args = match fields.get("args") {
        Some(value) => string_list(value).ok_or("'args' is not a list of strings")?,
        None => return Err("missing 'args'".to_string()),
    };

    Ok(McpServerConfig {
        command,
        args,
        env: fields.get("env").and_then(string_map),
        disabled: fields.get("disabled").and_then(Value::as_bool),
        always_allow: fields
            .get("alwaysAllow")
            .and_then(string_list)
            .map(dedup_keep_first),
    })
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn string_map(value: &Value) -> Option<IndexMap<String, String>> {
    let map: &Map<String, Value> = value.as_object()?;
    map.iter()
        .map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
        .collect()
}

fn dedup_keep_first(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_mapping() {
        let report = parse_mcp_document(&json!({
            "fs": {"command": "npx", "args": ["-y", "server-fs"]},
            "git": {"command": "uvx", "args": []}
        }))
        .unwrap();

        assert_eq!(report.servers.keys().collect::<Vec<_>>(), vec!["fs", "git"]);
        assert_eq!(report.servers["git"].args, Vec::<String>::new());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_wrapper_document() {
        let report = parse_mcp_document(&json!({
            "mcpServers": {"fs": {"command": "npx", "args": ["server-fs"]}}
        }))
        .unwrap();
        assert_eq!(report.servers.len(), 1);
        assert_eq!(report.servers["fs"].command, "npx");
    }

    #[test]
    fn test_entries_missing_command_or_args_are_skipped() {
        let report = parse_mcp_document(&json!({
            "no-command": {"args": []},
            "no-args": {"command": "x"},
            "bad-args": {"command": "x", "args": [1, 2]},
            "not-object": "npx",
            "ok": {"command": "x", "args": ["a"]}
        }))
        .unwrap();

        assert_eq!(report.servers.keys().collect::<Vec<_>>(), vec!["ok"]);
        let skipped: Vec<_> = report.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, vec!["no-command", "no-args", "bad-args", "not-object"]);
        assert_eq!(report.skipped[1].reason, "missing 'args'");
    }

    #[test]
    fn test_optional_fields_of_wrong_type_are_dropped() {
        let report = parse_mcp_document(&json!({
            "s": {
                "command": "x",
                "args": [],
                "env": {"TOKEN": 5},
                "disabled": "yes",
                "alwaysAllow": ["read", "write", "read"]
            }
        }))
        .unwrap();

        let server = &report.servers["s"];
        assert_eq!(server.env, None);
        assert_eq!(server.disabled, None);
        assert_eq!(
            server.always_allow,
            Some(vec!["read".to_string(), "write".to_string()])
        );
    }

    #[test]
    fn test_non_object_top_level_is_rejected() {
        let err = parse_mcp_document(&json!([1, 2])).unwrap_err();
        assert!(err.contains("found an array"));
    }

    #[test]
    fn test_inline_source_parse_error() {
        let err = load_mcp_servers(&McpSource::Inline("{not json".to_string())).unwrap_err();
        assert!(matches!(err, WspError::Parse { .. }));
        assert!(err.to_string().contains("inline MCP JSON"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_mcp_servers(&McpSource::File(PathBuf::from("/definitely/absent.json")))
            .unwrap_err();
        assert!(matches!(err, WspError::Io { .. }));
    }
}
