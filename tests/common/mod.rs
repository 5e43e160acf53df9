//! Integration test common infrastructure.
//!
//! Provides a mock provisioning endpoint and canned credential bodies.

#![allow(dead_code)]

use lounge_embed::HttpProvisioner;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROVISION_PATH: &str = "/api/irc-user-provision";

/// A successful provisioning body.
pub fn credentials_body(user: &str, password: &str) -> Value {
    json!({
        "success": true,
        "ircUsername": user,
        "ircPassword": password,
        "networkName": "curia"
    })
}

/// Start a mock server and a provisioner pointed at it.
pub async fn setup(auth_token: Option<&str>) -> (MockServer, HttpProvisioner) {
    let server = MockServer::start().await;
    let provisioner = HttpProvisioner::with_client(
        reqwest::Client::new(),
        &server.uri(),
        auth_token.map(str::to_string),
    );
    (server, provisioner)
}

/// Mount a single response for the provisioning endpoint.
pub async fn respond_with(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(PROVISION_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}
