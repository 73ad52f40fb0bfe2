//! Platform-specific provider implementations.
//!
//! Planners are pure, so both are compiled everywhere and tested on any host;
//! the registry picks the one matching the running OS.

pub mod macos;
pub mod unix;

pub use macos::MacOSPlatform;
pub use unix::UnixPlatform;
