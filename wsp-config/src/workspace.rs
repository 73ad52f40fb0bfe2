//! The workspace data model and its persisted JSON shape.
//!
//! Records are written with camelCase keys. Absent optionals are written as
//! `null` and empty lists as `[]`, so a save/load round trip keeps the
//! difference between "empty" and "not set".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Browsers whose profiles can be selected when launching.
pub const PROFILE_AWARE_BROWSERS: &[&str] = &["Safari"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub name: String,
    /// Launch order.
    #[serde(default)]
    pub applications: Vec<ApplicationConfig>,
    #[serde(default)]
    pub browser_urls: Vec<String>,
    /// May start with `~`; expanded at switch time.
    #[serde(default)]
    pub terminal_directories: Vec<String>,
    #[serde(default)]
    pub vscode_workspace: Option<String>,
    #[serde(default)]
    pub mcp_servers: Option<IndexMap<String, McpServerConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    pub name: String,
    #[serde(default)]
    pub bundle_identifier: Option<String>,
    /// Reserved for window placement; not applied when switching.
    #[serde(default)]
    pub window_positions: Option<Vec<WindowPosition>>,
    #[serde(default)]
    pub safari_profile: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpServerConfig {
    pub command: String,
    pub args: Vec<String>,
    #[serde(default)]
    pub env: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub always_allow: Option<Vec<String>>,
}

impl Workspace {
    /// A workspace with every collection empty and every optional unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            applications: Vec::new(),
            browser_urls: Vec::new(),
            terminal_directories: Vec::new(),
            vscode_workspace: None,
            mcp_servers: None,
        }
    }

    /// Clone every field under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// The declared MCP servers, if there is at least one.
    pub fn active_mcp_servers(&self) -> Option<&IndexMap<String, McpServerConfig>> {
        self.mcp_servers.as_ref().filter(|servers| !servers.is_empty())
    }
}

impl ApplicationConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle_identifier: None,
            window_positions: None,
            safari_profile: None,
        }
    }

    /// The browser profile to open, only for browsers that support one.
    pub fn browser_profile(&self) -> Option<&str> {
        let profile = self.safari_profile.as_deref()?;
        PROFILE_AWARE_BROWSERS
            .iter()
            .any(|browser| browser.eq_ignore_ascii_case(self.name.trim()))
            .then_some(profile)
    }
}

impl McpServerConfig {
    pub fn new<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: None,
            disabled: None,
            always_allow: None,
        }
    }

    /// The shape written into third-party config files: `command` and `args`
    /// always, the optional fields only when set.
    pub fn to_external_value(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("command".to_string(), Value::from(self.command.clone()));
        entry.insert("args".to_string(), Value::from(self.args.clone()));
        if let Some(env) = &self.env {
            let env: Map<String, Value> = env
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect();
            entry.insert("env".to_string(), Value::Object(env));
        }
        if let Some(disabled) = self.disabled {
            entry.insert("disabled".to_string(), Value::from(disabled));
        }
        if let Some(always_allow) = &self.always_allow {
            entry.insert("alwaysAllow".to_string(), Value::from(always_allow.clone()));
        }
        Value::Object(entry)
    }
}

/// Serialize a server mapping in the external config shape.
pub fn servers_to_external_value(servers: &IndexMap<String, McpServerConfig>) -> Value {
    Value::Object(
        servers
            .iter()
            .map(|(name, server)| (name.clone(), server.to_external_value()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_workspace_serializes_nulls_and_empty_lists() {
        let value = serde_json::to_value(Workspace::new("blank")).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "blank",
                "applications": [],
                "browserUrls": [],
                "terminalDirectories": [],
                "vscodeWorkspace": null,
                "mcpServers": null
            })
        );
    }

    #[test]
    fn test_missing_fields_default_on_load() {
        let workspace: Workspace = serde_json::from_str(r#"{"name": "minimal"}"#).unwrap();
        assert_eq!(workspace, Workspace::new("minimal"));
    }

    #[test]
    fn test_negative_window_geometry_loads() {
        let app: ApplicationConfig = serde_json::from_value(json!({
            "name": "Terminal",
            "windowPositions": [{"x": -1440, "y": 0, "width": -1, "height": 900}]
        }))
        .unwrap();
        let position = app.window_positions.unwrap()[0];
        assert_eq!((position.x, position.width), (-1440, -1));
    }

    #[test]
    fn test_renamed_keeps_every_other_field() {
        let mut original = Workspace::new("a");
        original.browser_urls = vec!["https://a.test".to_string()];
        original.vscode_workspace = Some("~/a.code-workspace".to_string());

        let clone = original.renamed("b");
        assert_eq!(clone.name, "b");
        assert_eq!(clone.browser_urls, original.browser_urls);
        assert_eq!(clone.vscode_workspace, original.vscode_workspace);
    }

    #[test]
    fn test_browser_profile_only_for_known_browsers() {
        let mut safari = ApplicationConfig::named("safari");
        safari.safari_profile = Some("Work".to_string());
        assert_eq!(safari.browser_profile(), Some("Work"));

        let mut chrome = ApplicationConfig::named("Google Chrome");
        chrome.safari_profile = Some("Work".to_string());
        assert_eq!(chrome.browser_profile(), None);

        assert_eq!(ApplicationConfig::named("Safari").browser_profile(), None);
    }

    #[test]
    fn test_external_value_omits_unset_optionals() {
        let mut server = McpServerConfig::new("npx", ["-y", "@acme/server"]);
        assert_eq!(
            server.to_external_value(),
            json!({"command": "npx", "args": ["-y", "@acme/server"]})
        );

        server.disabled = Some(false);
        server.always_allow = Some(vec!["read_file".to_string()]);
        assert_eq!(
            server.to_external_value(),
            json!({
                "command": "npx",
                "args": ["-y", "@acme/server"],
                "disabled": false,
                "alwaysAllow": ["read_file"]
            })
        );
    }

    #[test]
    fn test_active_mcp_servers_ignores_empty_mapping() {
        let mut workspace = Workspace::new("w");
        assert!(workspace.active_mcp_servers().is_none());
        workspace.mcp_servers = Some(IndexMap::new());
        assert!(workspace.active_mcp_servers().is_none());
    }
}
