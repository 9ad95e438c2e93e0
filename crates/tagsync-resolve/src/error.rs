//! Error types for identity resolution.
//!
//! Declines and operator cancellations are NOT errors — they are
//! [`Resolution`](crate::traits::Resolution) values. This enum covers the
//! genuine failures: a broken directory dependency, a dead console, and
//! chain misconfiguration.

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur during identity resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver chain was configured empty.
    #[error("No resolvers configured")]
    NoResolvers,

    /// The directory dependency failed (transport or server error).
    #[error("Directory lookup failed: {0}")]
    Directory(#[from] tagsync_client::ClientError),

    /// The operator console failed outside of a normal end-of-file.
    #[error("Console error: {0}")]
    Console(String),
}

impl ResolveError {
    /// Create a new console error.
    pub fn console(message: impl Into<String>) -> Self {
        Self::Console(message.into())
    }
}
