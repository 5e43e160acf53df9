// End-to-end flow: account provisioned server-side, served over HTTP,
// fetched by a session, turned into the iframe URL.

use lounge_embed::ident::NickExt;
use lounge_embed::lounge::{ChatChannel, ChatMode, ChatTarget, Theme};
use lounge_embed::provisioning::provision_account;
use lounge_embed::security::verify_password;
use lounge_embed::{ProvisionError, ProvisioningSession, SessionStatus};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::ResponseTemplate;

mod common;

use common::{respond_with, setup};

fn decoded_pairs(url: &str) -> Vec<(String, String)> {
    url::Url::parse(url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[tokio::test]
async fn test_account_to_iframe_url() {
    let account = provision_account("Zoë O'Neil", Some("usr_77aa")).unwrap();
    assert!(account.identity.nickname.is_valid_nick());
    assert!(verify_password(
        account.identity.password.expose(),
        account.credential.password_hash.as_str()
    ));

    let (server, provisioner) = setup(Some("jwt")).await;
    let body = serde_json::to_value(account.credentials("curia")).unwrap();
    respond_with(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let session = ProvisioningSession::new();
    session.start(provisioner.clone());
    session.start(provisioner);

    let status = session.settled().await;
    let credentials = status.credentials().expect("ready").clone();
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    let channel: ChatChannel = serde_json::from_value(json!({
        "id": 3,
        "community_id": "c-9",
        "name": "Lobby & Co",
        "description": "front door",
        "irc_channel_name": "lobby",
        "is_single_mode": false,
        "is_default": true,
        "settings": { "irc": { "nofocus": false } },
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:00:00Z"
    }))
    .unwrap();

    let target = ChatTarget::for_channel(&channel, Some("https://chat.x"), Some(Theme::Dark), None);
    let url = target.url(&credentials);
    let pairs = decoded_pairs(&url);

    assert_eq!(pairs[0], ("password".to_string(), account.identity.password.expose().to_string()));
    assert_eq!(pairs[3].1, format!("{}/curia", account.credential.username));
    assert_eq!(pairs[5].1, "#lobby");
    assert_eq!(pairs[6], ("theme".to_string(), "dark".to_string()));
    assert_eq!(pairs[7], ("mode".to_string(), ChatMode::Normal.as_str().to_string()));
    assert_eq!(pairs.len(), 8);

    let logged = target.redacted_url(&credentials);
    assert!(!logged.contains(account.identity.password.expose()));
}

#[tokio::test]
async fn test_network_failure_then_retry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = {
        let calls = Arc::clone(&calls);
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(ProvisionError::message("network down"))
                } else {
                    provision_account("retry user", None)
                        .map(|account| account.credentials("curia"))
                        .map_err(|e| ProvisionError::message(e.to_string()))
                }
            }
        }
    };

    let session = ProvisioningSession::new();
    session.start(source);

    let failed = session.settled().await;
    assert_eq!(
        failed,
        SessionStatus::Error {
            message: "network down".to_string()
        }
    );

    session.retry();
    let ready = session.settled().await;
    assert_eq!(
        ready.credentials().map(|c| c.irc_username.as_str()),
        Some("retry_user")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
