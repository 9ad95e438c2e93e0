//! Directory lookup: card UID → known user identity.
//!
//! The directory is the cheapest resolver backend: one GET per card,
//! keyed by UID, answering with an optional `login` field. An absent
//! field means "user unknown" (a decline); a transport failure means a
//! broken dependency and surfaces as a hard error.

use crate::error::{ClientError, Result};
use serde::Deserialize;
use tagsync_core::{CardUid, UserLogin};
use tracing::debug;

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the directory service, without trailing slash.
    pub base_url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://directory.example.org".to_string(),
        }
    }
}

/// Capability: resolve a card UID to a known identity, or report unknown.
pub trait DirectoryLookup: Send + Sync {
    /// Look up the identity bound to a card UID.
    ///
    /// `Ok(None)` means the directory does not know this card — a normal
    /// decline, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures or non-success responses:
    /// a broken directory is a broken dependency, never a silent decline.
    async fn lookup(&self, card: &CardUid) -> Result<Option<UserLogin>>;
}

/// JSON record returned by `GET /card/{uid}`.
#[derive(Debug, Deserialize)]
struct CardRecord {
    #[serde(default)]
    login: Option<String>,
}

/// HTTP directory client.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a directory client from configuration.
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }
}

impl DirectoryLookup for DirectoryClient {
    async fn lookup(&self, card: &CardUid) -> Result<Option<UserLogin>> {
        let url = format!("{}/card/{}", self.base_url, card);
        debug!(%card, "directory lookup");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::api(
                status.as_u16(),
                format!("directory lookup for {card} failed"),
            ));
        }

        let record: CardRecord = response.json().await?;
        match record.login {
            Some(login) => Ok(Some(UserLogin::new(&login)?)),
            None => {
                debug!(%card, "directory has no identity for card");
                Ok(None)
            }
        }
    }
}

/// Enum wrapper for directory dispatch (native async traits are not
/// object-safe).
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyDirectory {
    /// HTTP-backed directory.
    Http(DirectoryClient),

    /// Scripted directory for tests.
    Mock(crate::mock::MockDirectory),
}

impl DirectoryLookup for AnyDirectory {
    async fn lookup(&self, card: &CardUid) -> Result<Option<UserLogin>> {
        match self {
            Self::Http(client) => client.lookup(card).await,
            Self::Mock(client) => client.lookup(card).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(!config.base_url.ends_with('/'));
    }
}
