//! Wire-level tests for the directory and registry clients.
//!
//! These run against a local wiremock server and verify the JSON shapes,
//! the conflict-vs-fatal status mapping, and that local validation never
//! costs a network round-trip.

use tagsync_client::{
    AssignOutcome, CardRegistry, ClientError, DirectoryClient, DirectoryConfig, DirectoryLookup,
    RegistryClient,
};
use tagsync_core::{CardUid, UserLogin};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn card() -> CardUid {
    CardUid::new("04a1b2c3").unwrap()
}

fn login() -> UserLogin {
    UserLogin::new("a@b.org").unwrap()
}

#[tokio::test]
async fn directory_lookup_returns_known_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/04a1b2c3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "a@b.org"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DirectoryClient::new(DirectoryConfig {
        base_url: server.uri(),
    });

    let resolved = client.lookup(&card()).await.unwrap();
    assert_eq!(resolved, Some(login()));
}

#[tokio::test]
async fn directory_lookup_declines_when_login_field_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/04a1b2c3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(DirectoryConfig {
        base_url: server.uri(),
    });

    assert_eq!(client.lookup(&card()).await.unwrap(), None);
}

#[tokio::test]
async fn directory_lookup_surfaces_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card/04a1b2c3"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(DirectoryConfig {
        base_url: server.uri(),
    });

    let result = client.lookup(&card()).await;
    assert!(matches!(result, Err(ClientError::Api { status: 503, .. })));
}

#[tokio::test]
async fn login_exchanges_credentials_for_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "id": "operator",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "t0k"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The token must be replayed as a bearer header on assignments.
    Mock::given(method("POST"))
        .and(path("/api/b.org/users/a@b.org/card"))
        .and(header("authorization", "Bearer t0k"))
        .and(body_json(serde_json::json!({ "id": "04a1b2c3" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RegistryClient::login(server.uri(), "operator", "hunter2")
        .await
        .unwrap();

    let outcome = client.assign_card(&login(), &card()).await.unwrap();
    assert_eq!(outcome, AssignOutcome::Assigned);
}

#[tokio::test]
async fn login_failure_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "bad credentials"
        })))
        .mount(&server)
        .await;

    let result = RegistryClient::login(server.uri(), "operator", "wrong").await;
    match result {
        Err(ClientError::Auth { message }) => assert_eq!(message, "bad credentials"),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn assign_maps_forbidden_to_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/b.org/users/a@b.org/card"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = RegistryClient::with_token(server.uri(), "t0k");
    let outcome = client.assign_card(&login(), &card()).await.unwrap();
    assert_eq!(outcome, AssignOutcome::Conflict);
}

#[tokio::test]
async fn assign_surfaces_fatal_error_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/b.org/users/a@b.org/card"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "registry exploded"
        })))
        .mount(&server)
        .await;

    let client = RegistryClient::with_token(server.uri(), "t0k");
    match client.assign_card(&login(), &card()).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "registry exploded");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_identity_never_reaches_the_network() {
    let server = MockServer::start().await;
    // Zero expected requests: validation happens before the round-trip.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = RegistryClient::with_token(server.uri(), "t0k");
    let bad = UserLogin::new("not-an-email").unwrap();

    let result = client.assign_card(&bad, &card()).await;
    assert!(matches!(result, Err(ClientError::Validation(_))));

    server.verify().await;
}
