//! Launch orchestration for wsp.
//!
//! The workspace manager describes side effects as [`LaunchAction`]s and hands
//! them to a [`Launcher`]. Platform providers turn actions into argument
//! vectors, keeping `#[cfg]` conditionals out of the rest of the codebase.

pub mod action;
pub mod launcher;
pub mod providers;
pub mod registry;
pub mod snapshot;
pub mod traits;

pub use action::{LaunchAction, LaunchCommand, LaunchOptions, LaunchStep};
pub use launcher::SystemLauncher;
pub use registry::PlatformRegistry;
pub use snapshot::{StateSnapshot, SystemSnapshotter};
pub use traits::{Launcher, McpTargetSpec, PlatformProvider, Snapshotter};

/// Get the current platform provider
pub fn current() -> std::sync::Arc<dyn PlatformProvider> {
    PlatformRegistry::current()
}
