use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture giving every run an isolated storage root and home directory
struct CliTestFixture {
    temp_dir: TempDir,
}

impl CliTestFixture {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn wsp_home(&self) -> PathBuf {
        self.temp_dir.path().join("wsp-home")
    }

    fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    fn wsp(&self) -> Command {
        let mut cmd = Command::cargo_bin("wsp").unwrap();
        cmd.env("WSP_HOME", self.wsp_home())
            .env("HOME", self.home())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("RUST_LOG")
            .env_remove("WSP_LOG_LEVEL");
        cmd
    }

    fn record(&self, name: &str) -> serde_json::Value {
        let path = self.wsp_home().join("workspaces").join(format!("{name}.json"));
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }
}

#[test]
fn test_create_then_list_and_show() {
    let fixture = CliTestFixture::new();

    fixture
        .wsp()
        .args([
            "create",
            "coding",
            "--browser-urls",
            "https://a.test, https://b.test,",
            "--terminal-dirs",
            "~/src",
            "--apps",
            "Slack",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Workspace 'coding' created"));

    fixture
        .wsp()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("• coding"));

    let output = fixture.wsp().args(["show", "coding"]).output().unwrap();
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["browserUrls"][1], "https://b.test");
    assert_eq!(shown["terminalDirectories"][0], "~/src");
    assert_eq!(shown["applications"][0]["name"], "Slack");
    assert!(shown["vscodeWorkspace"].is_null());
}

#[test]
fn test_list_without_workspaces() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No workspaces found"));
}

#[test]
fn test_duplicate_create_fails_unless_forced() {
    let fixture = CliTestFixture::new();
    fixture.wsp().args(["create", "dup"]).assert().success();

    fixture
        .wsp()
        .args(["create", "dup", "--browser-urls", "https://x.test"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fixture.record("dup")["browserUrls"], serde_json::json!([]));

    fixture
        .wsp()
        .args(["create", "dup", "--browser-urls", "https://x.test", "--force"])
        .assert()
        .success();
    assert_eq!(
        fixture.record("dup")["browserUrls"],
        serde_json::json!(["https://x.test"])
    );
}

#[test]
fn test_create_from_template() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["create", "base", "--vscode-workspace", "~/base.code-workspace"])
        .assert()
        .success();

    fixture
        .wsp()
        .args(["create", "copy", "--template", "base"])
        .assert()
        .success()
        .stderr(predicate::str::contains("from template 'base'"));

    assert_eq!(
        fixture.record("copy")["vscodeWorkspace"],
        "~/base.code-workspace"
    );
    assert_eq!(fixture.record("copy")["name"], "copy");
}

#[test]
fn test_missing_template_fails() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["create", "copy", "--template", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace 'ghost' not found"));
    assert!(!fixture.wsp_home().join("workspaces/copy.json").exists());
}

#[test]
fn test_invalid_name_is_rejected() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["create", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_inline_mcp_json_reports_skipped_entries() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args([
            "create",
            "ai",
            "--mcp-json",
            r#"{"fs": {"command": "npx", "args": ["fs"]}, "broken": {"command": "x"}}"#,
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped MCP server 'broken'"));

    let record = fixture.record("ai");
    assert_eq!(record["mcpServers"]["fs"]["command"], "npx");
    assert!(record["mcpServers"].get("broken").is_none());
}

#[test]
fn test_config_replaces_supplied_fields_only() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["create", "w", "--browser-urls", "x", "--terminal-dirs", "y"])
        .assert()
        .success();

    fixture
        .wsp()
        .args(["config", "w", "--terminal-dirs", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("terminalDirectories"));

    let record = fixture.record("w");
    assert_eq!(record["browserUrls"], serde_json::json!(["x"]));
    assert_eq!(record["terminalDirectories"], serde_json::json!(["z"]));
}

#[test]
fn test_config_without_changes_succeeds() {
    let fixture = CliTestFixture::new();
    fixture.wsp().args(["create", "w"]).assert().success();

    fixture
        .wsp()
        .args(["config", "w"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes made"));
}

#[test]
fn test_config_missing_workspace_fails() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["config", "ghost", "--browser-urls", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_switch_missing_workspace_lists_available() {
    let fixture = CliTestFixture::new();
    fixture.wsp().args(["create", "coding"]).assert().success();

    fixture
        .wsp()
        .args(["switch", "gaming", "--force"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Available workspaces: coding"));
}

#[test]
fn test_switch_empty_workspace_completes() {
    let fixture = CliTestFixture::new();
    fixture.wsp().args(["create", "quiet"]).assert().success();

    fixture
        .wsp()
        .args(["switch", "quiet", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to workspace 'quiet'"));
}

#[test]
fn test_switch_merges_mcp_servers_into_configured_target() {
    let fixture = CliTestFixture::new();
    let target_dir = fixture.home().join("ai-app");
    fs::create_dir_all(&target_dir).unwrap();
    let target_file = target_dir.join("config.json");
    fs::write(&target_file, r#"{"theme": "dark", "mcpServers": {"old": {}}}"#).unwrap();

    fs::create_dir_all(fixture.wsp_home()).unwrap();
    fs::write(
        fixture.wsp_home().join("settings.yaml"),
        format!(
            "mcp_targets:\n  - name: AiApp\n    config_path: {}\n",
            target_file.display()
        ),
    )
    .unwrap();

    fixture
        .wsp()
        .args([
            "create",
            "ai",
            "--mcp-json",
            r#"{"new": {"command": "uvx", "args": ["new"]}}"#,
        ])
        .assert()
        .success();

    // No terminal is attached, so the restart prompt fails and counts as declined
    fixture
        .wsp()
        .args(["switch", "ai", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("MCP config updated for AiApp"))
        .stderr(predicate::str::contains("manually"));

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target_file).unwrap()).unwrap();
    assert_eq!(
        merged,
        serde_json::json!({
            "theme": "dark",
            "mcpServers": {"new": {"command": "uvx", "args": ["new"]}}
        })
    );
    assert!(target_dir.join("config.json.backup").exists());
}

#[test]
fn test_invalid_settings_file_fails() {
    let fixture = CliTestFixture::new();
    fs::create_dir_all(fixture.wsp_home()).unwrap();
    fs::write(
        fixture.wsp_home().join("settings.yaml"),
        "restart_delay_ms: [1, 2]\n",
    )
    .unwrap();

    fixture
        .wsp()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file"));
}

#[test]
fn test_delete_with_force() {
    let fixture = CliTestFixture::new();
    fixture.wsp().args(["create", "old"]).assert().success();

    fixture
        .wsp()
        .args(["delete", "old", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Workspace 'old' deleted"));
    assert!(!fixture.wsp_home().join("workspaces/old.json").exists());

    fixture
        .wsp()
        .args(["delete", "old", "--force"])
        .assert()
        .failure();
}

#[test]
fn test_delete_outside_store_is_rejected() {
    let fixture = CliTestFixture::new();
    fs::create_dir_all(fixture.wsp_home()).unwrap();
    let victim = fixture.wsp_home().join("victim.json");
    fs::write(&victim, r#"{"name": "victim"}"#).unwrap();

    fixture
        .wsp()
        .args(["delete", "../victim", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
    fixture
        .wsp()
        .args(["show", "../victim"])
        .assert()
        .failure();
    assert!(victim.exists());
}

#[test]
fn test_completion_generates_script() {
    let fixture = CliTestFixture::new();
    fixture
        .wsp()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wsp"));
}
