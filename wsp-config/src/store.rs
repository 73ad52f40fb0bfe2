//! Durable workspace records, one JSON file per workspace.
//!
//! Concurrent writers are not coordinated: the last save wins.

use crate::workspace::Workspace;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use wsp_core::error::{Result, WspError};

/// Persistence seam for workspace records.
pub trait WorkspaceStore {
    fn exists(&self, name: &str) -> bool;
    fn load(&self, name: &str) -> Result<Workspace>;
    /// Create or replace the record for `workspace.name`.
    fn save(&self, workspace: &Workspace) -> Result<()>;
    /// Every stored name, sorted.
    fn list(&self) -> Result<Vec<String>>;
    fn delete(&self, name: &str) -> Result<()>;
}

const RECORD_EXTENSION: &str = "json";

pub struct FileWorkspaceStore {
    root: PathBuf,
}

impl FileWorkspaceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the user's workspaces directory.
    pub fn from_user_home() -> Result<Self> {
        Ok(Self::new(wsp_core::user_paths::workspaces_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for `name`. Names that could resolve outside the
    /// root are rejected.
    pub fn record_path(&self, name: &str) -> Result<PathBuf> {
        wsp_core::validation::validate_workspace_name(name)?;
        Ok(self.root.join(format!("{}.{}", name, RECORD_EXTENSION)))
    }

    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| WspError::filesystem(e, &self.root, "create_dir_all"))
    }
}

impl WorkspaceStore for FileWorkspaceStore {
    fn exists(&self, name: &str) -> bool {
        self.record_path(name).is_ok_and(|path| path.is_file())
    }

    fn load(&self, name: &str) -> Result<Workspace> {
        let path = self.record_path(name)?;
        if !path.is_file() {
            return Err(WspError::not_found(name, self.list().unwrap_or_default()));
        }
        let content =
            fs::read_to_string(&path).map_err(|e| WspError::filesystem(e, &path, "read"))?;
        serde_json::from_str(&content)
            .map_err(|e| WspError::parse(format!("workspace record '{}'", path.display()), e))
    }

    fn save(&self, workspace: &Workspace) -> Result<()> {
        let path = self.record_path(&workspace.name)?;
        self.ensure_root()?;

        let json = serde_json::to_string_pretty(workspace)?;
        write_atomically(&path, json.as_bytes())?;
        debug!(workspace = %workspace.name, path = %path.display(), "saved workspace record");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let entries =
            fs::read_dir(&self.root).map_err(|e| WspError::filesystem(e, &self.root, "read_dir"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| WspError::filesystem(e, &self.root, "read_dir"))?;
            let path = entry.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.record_path(name)?;
        if !path.is_file() {
            return Err(WspError::not_found(name, self.list().unwrap_or_default()));
        }
        fs::remove_file(&path).map_err(|e| WspError::filesystem(e, &path, "remove_file"))?;
        debug!(workspace = %name, "deleted workspace record");
        Ok(())
    }
}

/// Write through a sibling temp file and rename over the destination, so a
/// reader never sees a half-written file.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| WspError::filesystem(e, dir, "create"))?;
    temp.write_all(contents)
        .map_err(|e| WspError::filesystem(e, temp.path(), "write"))?;
    temp.persist(path)
        .map_err(|e| WspError::filesystem(e.error, path, "rename"))?;
    Ok(())
}
