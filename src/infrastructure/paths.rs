//! Path utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`. The only
//! thing Bookworld writes to disk is its trace file, so this module is small.

use std::path::PathBuf;

/// Returns the data directory used for the trace file.
///
/// Resolves to `/host/.local/share/zellij/bookworld` inside the sandbox, which
/// maps to `~/.local/share/zellij/bookworld` when Zellij is started from the
/// user's home directory.
///
/// # Examples
///
/// ```
/// use bookworld::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/bookworld")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookworld")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use bookworld::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/traces"), "/host/traces");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/traces"), "/tmp/traces");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
