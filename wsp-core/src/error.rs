//! Error taxonomy shared by the store, the MCP merger and the workspace manager.

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WspError {
    /// The named workspace has no stored record.
    NotFound {
        name: String,
        /// Names that do exist, so the caller can suggest a retry.
        available: Vec<String>,
    },
    AlreadyExists(String),
    /// Stored or external JSON/YAML could not be parsed.
    Parse { context: String, message: String },
    Io {
        path: String,
        operation: String,
        #[source]
        source: std::io::Error,
    },
    /// Some switch steps failed while others succeeded. Never fatal.
    PartialApply { failed: usize, total: usize },
    Validation(String),
    Prompt(String),
    Other(#[from] anyhow::Error),
}

impl Display for WspError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WspError::NotFound { name, .. } => write!(f, "Workspace '{}' not found", name),
            WspError::AlreadyExists(name) => write!(f, "Workspace '{}' already exists", name),
            WspError::Parse { context, message } => {
                write!(f, "Failed to parse {}: {}", context, message)
            }
            WspError::Io {
                path,
                operation,
                source,
            } => write!(f, "Filesystem error during '{}' on '{}': {}", operation, path, source),
            WspError::PartialApply { failed, total } => {
                write!(f, "{} of {} switch steps failed", failed, total)
            }
            WspError::Validation(s) => write!(f, "Validation error: {}", s),
            WspError::Prompt(s) => write!(f, "Prompt failed: {}", s),
            WspError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl WspError {
    /// Wrap an I/O failure with the path and operation that produced it.
    pub fn filesystem(source: std::io::Error, path: &Path, operation: impl Into<String>) -> Self {
        WspError::Io {
            path: path.display().to_string(),
            operation: operation.into(),
            source,
        }
    }

    pub fn parse(context: impl Into<String>, message: impl Display) -> Self {
        WspError::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub fn not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        WspError::NotFound {
            name: name.into(),
            available,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WspError::NotFound { .. })
    }
}

impl From<serde_json::Error> for WspError {
    fn from(err: serde_json::Error) -> Self {
        WspError::parse("JSON", err)
    }
}

impl From<serde_yaml_ng::Error> for WspError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        WspError::parse("YAML", err)
    }
}

pub type Result<T> = std::result::Result<T, WspError>;
