//! Validation of user-supplied names and values.
//!
//! A workspace name doubles as the file stem of its stored record, so it has
//! to be safe to join onto the storage directory.

use crate::error::{Result, WspError};

/// Validate a workspace name before it is used as a storage key.
///
/// # Returns
/// * `Ok(())` if the name can be stored verbatim
/// * `Err(WspError::Validation)` otherwise
pub fn validate_workspace_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WspError::Validation(
            "Workspace name cannot be empty".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(WspError::Validation(format!(
            "'{}' is not a valid workspace name",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(WspError::Validation(format!(
            "Workspace name '{}' cannot contain path separators",
            name
        )));
    }

    // Null bytes and control characters would corrupt the file name
    if name.chars().any(|c| c.is_control()) {
        return Err(WspError::Validation(
            "Workspace name contains invalid control characters".to_string(),
        ));
    }

    Ok(())
}

/// Split a comma-separated CLI value into trimmed, non-empty items.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
