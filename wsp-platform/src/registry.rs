//! Platform registry for detecting and providing platform implementations.

use crate::providers::{MacOSPlatform, UnixPlatform};
use crate::traits::PlatformProvider;
use std::sync::Arc;

/// Platform registry for detecting the current platform and creating providers.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Get the platform provider for the current operating system.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOSPlatform);

        #[cfg(all(unix, not(target_os = "macos")))]
        return Arc::new(UnixPlatform);

        #[cfg(not(unix))]
        compile_error!("Unsupported platform - only macOS and Unix-like platforms are supported");
    }

    /// Get a platform provider by name.
    ///
    /// Planners are pure, so any provider can be requested on any host.
    pub fn for_name(name: &str) -> Option<Arc<dyn PlatformProvider>> {
        match name.to_lowercase().as_str() {
            "unix" | "linux" => Some(Arc::new(UnixPlatform)),
            "macos" | "darwin" | "osx" => Some(Arc::new(MacOSPlatform)),
            _ => None,
        }
    }

    pub fn current_platform_name() -> &'static str {
        Self::current().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_name() {
        let name = PlatformRegistry::current_platform_name();
        assert!(["unix", "macos"].contains(&name));
    }

    #[test]
    fn test_for_name_aliases() {
        assert_eq!(PlatformRegistry::for_name("darwin").unwrap().name(), "macos");
        assert_eq!(PlatformRegistry::for_name("Linux").unwrap().name(), "unix");
        assert!(PlatformRegistry::for_name("plan9").is_none());
    }
}
