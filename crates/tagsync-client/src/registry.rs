//! Card registry client: one login exchange per process, then idempotent
//! (identity, card) assignments.

use crate::error::{ClientError, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tagsync_core::{CardUid, UserLogin};
use tracing::{debug, info, warn};

/// Outcome of one assignment submission.
///
/// A conflict (card already bound to a different identity) is a normal,
/// non-fatal outcome: the engine reports it and still records the pairing
/// for dedup purposes. Everything else non-success is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The registry accepted the assignment.
    Assigned,

    /// The card is already bound to a different identity.
    Conflict,
}

/// Capability: submit a (identity, card) pairing to the registry.
pub trait CardRegistry: Send + Sync {
    /// Assign a card to an identity.
    ///
    /// Implementations must validate the identity's routing domain
    /// (exactly one `@`) locally before any network round-trip.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed identity, or a
    /// transport/API error for non-success, non-conflict responses.
    async fn assign_card(&self, login: &UserLogin, card: &CardUid) -> Result<AssignOutcome>;
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}

/// Pull the server's `message` field out of an error body, falling back
/// to the HTTP status reason.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("unknown HTTP error")
        .to_string();

    match response.json::<ApiMessage>().await {
        Ok(ApiMessage {
            message: Some(message),
        }) => message,
        _ => fallback,
    }
}

/// HTTP registry client holding the process-lifetime bearer token.
///
/// Authentication happens once, either from a stored token
/// ([`RegistryClient::with_token`]) or an interactive credential exchange
/// ([`RegistryClient::login`]); every later submission reuses the token.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RegistryClient {
    /// Create a client from an already-established bearer token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Auth` carrying the server's message when the
    /// exchange is rejected, or a transport error if the service is
    /// unreachable.
    pub async fn login(
        base_url: impl Into<String>,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let base_url = base_url.into();
        debug!(%username, "registry login");

        let http = reqwest::Client::new();
        let response = http
            .post(format!("{base_url}/auth/login"))
            .json(&json!({ "id": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            warn!(%username, "registry login rejected: {message}");
            return Err(ClientError::auth(message));
        }

        let body: LoginResponse = response.json().await?;
        info!(%username, "registry login successful");

        Ok(Self {
            http,
            base_url,
            token: body.token,
        })
    }
}

impl CardRegistry for RegistryClient {
    async fn assign_card(&self, login: &UserLogin, card: &CardUid) -> Result<AssignOutcome> {
        // Local validation first: a malformed identity must never cost a
        // network round-trip.
        let domain = login.domain()?;

        let url = format!("{}/api/{}/users/{}/card", self.base_url, domain, login);
        debug!(%login, %card, "registry assignment");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "id": card.as_str() }))
            .send()
            .await?;

        match response.status() {
            StatusCode::FORBIDDEN => {
                debug!(%login, %card, "registry reported conflict");
                Ok(AssignOutcome::Conflict)
            }
            status if status.is_success() => Ok(AssignOutcome::Assigned),
            status => {
                let message = error_message(response).await;
                Err(ClientError::api(status.as_u16(), message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_login_fails_before_network() {
        // Unroutable base URL: if validation leaked past it, the call
        // would fail with a transport error instead.
        let client = RegistryClient::with_token("http://192.0.2.1:1", "t0k");
        let login = UserLogin::new("not-an-email").unwrap();
        let card = CardUid::new("04a1b2c3").unwrap();

        let result = client.assign_card(&login, &card).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }
}
