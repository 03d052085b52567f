//! Page-load configuration.
//!
//! Three knobs with working defaults: the directory fragment path, an
//! optional per-request timeout, and an optional user-agent override.
//! Values come from a YAML file (see [`loader`]) with CLI flags layered on
//! top by the command handlers.

pub mod loader;

use std::time::Duration;

/// Default path of the directory fragment, resolved relative to the page URL.
pub const DEFAULT_DIRECTORY_FRAGMENT: &str = "directory.html.frag";

/// Resolved configuration for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Path of the directory fragment, relative to the page URL.
    pub directory_fragment: String,

    /// Per-request timeout. `None` waits indefinitely, like the transports
    /// this tool replaces.
    pub timeout: Option<Duration>,

    /// User-agent override for the HTTP client.
    pub user_agent: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            directory_fragment: DEFAULT_DIRECTORY_FRAGMENT.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}
