//! Error types for the Bookworld plugin.
//!
//! This module defines the centralized error type [`BookworldError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Catalog failures are deliberately coarse: the view only ever shows a single
//! "fetch failed" message, while the variant and its detail are kept for tracing.

use thiserror::Error;

/// The main error type for Bookworld plugin operations.
///
/// # Examples
///
/// ```
/// use bookworld::BookworldError;
///
/// let error = BookworldError::Status(503);
/// assert!(error.is_fetch_failure());
/// assert_eq!(error.to_string(), "Catalog returned status 503");
/// ```
#[derive(Debug, Error)]
pub enum BookworldError {
    /// The request never produced a response (network failure, host refused,
    /// missing permission).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("Catalog returned status {0}")]
    Status(u16),

    /// The response body could not be interpreted as a catalog payload.
    ///
    /// Covers invalid JSON, a missing `totalItems`, and any item lacking its
    /// `id`, `volumeInfo` or `title`. One bad item fails the whole page.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// The trace directory could not be created.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value cannot be used.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookworldError {
    /// Returns `true` for the variants that collapse into the opaque
    /// "fetch failed" signal shown to the user.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_) | Self::Malformed(_))
    }
}

impl From<serde_json::Error> for BookworldError {
    fn from(error: serde_json::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

/// A specialized `Result` type for Bookworld operations.
pub type Result<T> = std::result::Result<T, BookworldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_are_classified() {
        assert!(BookworldError::Transport("timeout".into()).is_fetch_failure());
        assert!(BookworldError::Status(500).is_fetch_failure());
        assert!(BookworldError::Malformed("eof".into()).is_fetch_failure());
        assert!(!BookworldError::Config("page_size".into()).is_fetch_failure());
    }

    #[test]
    fn json_errors_become_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BookworldError = err.into();
        assert!(matches!(err, BookworldError::Malformed(_)));
    }
}
