// Integration tests for `HttpProvisioner` using wiremock.

use lounge_embed::{CredentialSource, HttpProvisioner, ProvisionError};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;

use common::{PROVISION_PATH, credentials_body, respond_with, setup};

#[tokio::test]
async fn test_provision_success_sends_bearer_token() {
    let (server, provisioner) = setup(Some("jwt-abc")).await;

    Mock::given(method("POST"))
        .and(path(PROVISION_PATH))
        .and(header("authorization", "Bearer jwt-abc"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(credentials_body("alice", "pw1")))
        .expect(1)
        .mount(&server)
        .await;

    let creds = provisioner.provision().await.unwrap();
    assert!(creds.success);
    assert_eq!(creds.irc_username, "alice");
    assert_eq!(creds.irc_password.as_str(), "pw1");
    assert_eq!(creds.network_name, "curia");
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let (server, provisioner) = setup(None).await;

    Mock::given(method("POST"))
        .and(path(PROVISION_PATH))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(credentials_body("bob", "pw2")),
    )
    .await;

    let creds = provisioner.fetch().await.unwrap();
    assert_eq!(creds.irc_username, "bob");
}

#[tokio::test]
async fn test_error_body_message_is_used() {
    let (server, provisioner) = setup(Some("expired")).await;
    respond_with(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "error": "Unauthorized",
            "details": "token expired"
        })),
    )
    .await;

    let err = provisioner.provision().await.unwrap_err();
    assert!(matches!(err, ProvisionError::Status { status: 401, .. }));
    assert_eq!(err.to_string(), "IRC provisioning failed: Unauthorized");
}

#[tokio::test]
async fn test_non_json_error_falls_back_to_status_line() {
    let (server, provisioner) = setup(None).await;
    respond_with(&server, ResponseTemplate::new(503).set_body_string("<html>down</html>")).await;

    let err = provisioner.provision().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "IRC provisioning failed: HTTP 503: Service Unavailable"
    );
}

#[tokio::test]
async fn test_unsuccessful_body_is_rejected() {
    let (server, provisioner) = setup(None).await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "ircUsername": "",
            "ircPassword": "",
            "networkName": ""
        })),
    )
    .await;

    let err = provisioner.provision().await.unwrap_err();
    assert!(matches!(err, ProvisionError::Rejected));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, provisioner) = setup(None).await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "ok": true })),
    )
    .await;

    let err = provisioner.provision().await.unwrap_err();
    assert!(matches!(err, ProvisionError::Decode(_)));
    assert_eq!(err.error_code(), "decode");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    // Nothing listens on port 1.
    let provisioner =
        HttpProvisioner::with_client(reqwest::Client::new(), "http://127.0.0.1:1", None);

    let err = provisioner.provision().await.unwrap_err();
    assert!(matches!(err, ProvisionError::Request(_)));
    assert_eq!(err.error_code(), "request");
    assert!(err.to_string().starts_with("IRC provisioning failed: "));
}
