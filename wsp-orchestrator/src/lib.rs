//! Workspace orchestration business logic
//!
//! This crate contains the workspace manager. It depends only on the
//! collaborator traits (store, launcher, MCP merger, prompter, snapshotter),
//! so the CLI wires in real implementations and tests use the in-memory ones
//! from `test_utils`.

pub mod manager;
pub mod prompt;
pub mod report;
pub mod request;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use manager::{apply_actions, WorkspaceManager};
pub use prompt::{DialoguerPrompter, Prompter};
pub use report::{
    CreateOutcome, DeleteOutcome, RestartDecision, SnapshotResult, StepResult, SwitchOutcome,
    SwitchReport, UpdateOutcome,
};
pub use request::{CreateMode, CreateRequest, SwitchOptions, WorkspaceFields, WorkspaceUpdate};
