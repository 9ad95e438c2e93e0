//! Error types for remote collaborator operations.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the directory or registry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local validation failed before any network round-trip.
    #[error("Validation error: {0}")]
    Validation(#[from] tagsync_core::Error),

    /// Transport-level failure (DNS, TLS, connect, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry rejected the login exchange.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Non-success, non-conflict response from a remote service.
    #[error("Remote error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Create a new authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new remote API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
