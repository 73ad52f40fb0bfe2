//! Pre-switch state capture.
//!
//! Only the list of running foreground applications is recorded; window
//! geometry is not captured.

use crate::traits::{PlatformProvider, Snapshotter};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use duct::cmd;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub captured_at: DateTime<Utc>,
    pub platform: String,
    pub applications: Vec<String>,
}

impl StateSnapshot {
    /// Parse AppleScript list output (`Finder, Safari, Terminal`).
    pub fn from_list_output(platform: &str, output: &str, captured_at: DateTime<Utc>) -> Self {
        let applications = output
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            captured_at,
            platform: platform.to_string(),
            applications,
        }
    }
}

pub struct SystemSnapshotter {
    platform: Arc<dyn PlatformProvider>,
    snapshots_dir: PathBuf,
}

impl SystemSnapshotter {
    pub fn new(platform: Arc<dyn PlatformProvider>, snapshots_dir: PathBuf) -> Self {
        Self {
            platform,
            snapshots_dir,
        }
    }
}

impl Snapshotter for SystemSnapshotter {
    fn capture(&self) -> Result<PathBuf> {
        let command = self.platform.running_apps_command().ok_or_else(|| {
            anyhow!(
                "capturing state is not supported on {}",
                self.platform.name()
            )
        })?;

        let output = cmd(command.program.as_str(), &command.args)
            .stderr_null()
            .read()
            .context("failed to list running applications")?;

        let now = Utc::now();
        let snapshot = StateSnapshot::from_list_output(self.platform.name(), &output, now);
        debug!(count = snapshot.applications.len(), "captured running applications");

        fs::create_dir_all(&self.snapshots_dir).with_context(|| {
            format!("failed to create {}", self.snapshots_dir.display())
        })?;
        let path = self
            .snapshots_dir
            .join(format!("{}.json", now.format("%Y%m%dT%H%M%S")));
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
