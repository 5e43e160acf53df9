//! HTTP credential source.
//!
//! Calls the host's provisioning endpoint, which validates the caller's
//! token, creates or refreshes the bouncer account, and answers with live
//! credentials:
//!
//! ```text
//! POST {api_base_url}/api/irc-user-provision
//! Authorization: Bearer <token>          (optional)
//!
//! 200 { "success": true, "ircUsername": "...", "ircPassword": "...", "networkName": "..." }
//! 4xx { "error": "...", "details": "..." }
//! ```

use super::{CredentialSource, ProvisionedCredentials};
use crate::config::ProvisioningConfig;
use crate::error::ProvisionError;
use crate::lounge::REDACTED;
use crate::telemetry::spans;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{Instrument, debug, info, warn};

/// Path of the provisioning endpoint under the API base URL.
pub const PROVISION_PATH: &str = "/api/irc-user-provision";

/// Error body returned by the endpoint on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Fetches credentials from the host API over HTTP.
#[derive(Clone)]
pub struct HttpProvisioner {
    http_client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpProvisioner {
    /// Create a provisioner from configuration.
    pub fn new(config: &ProvisioningConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("lounge-embed/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(http_client, &config.api_base_url, config.auth_token.clone())
    }

    /// Create a provisioner around an existing client.
    pub fn with_client(
        http_client: reqwest::Client,
        api_base_url: &str,
        auth_token: Option<String>,
    ) -> Self {
        let endpoint = format!("{}{}", api_base_url.trim_end_matches('/'), PROVISION_PATH);
        Self {
            http_client,
            endpoint,
            auth_token,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request credentials for the current user.
    pub async fn provision(&self) -> Result<ProvisionedCredentials, ProvisionError> {
        self.request()
            .instrument(spans::request(&self.endpoint))
            .await
    }

    async fn request(&self) -> Result<ProvisionedCredentials, ProvisionError> {
        info!("Starting IRC user provisioning");

        let mut request = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "IRC provisioning response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let fallback = format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) if !parsed.error.is_empty() => {
                    if let Some(details) = &parsed.details {
                        debug!(details = %details, "Provisioning error details");
                    }
                    parsed.error
                }
                _ => fallback,
            };
            warn!(status = status.as_u16(), error = %message, "IRC provisioning rejected");
            return Err(ProvisionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let credentials: ProvisionedCredentials = serde_json::from_str(&body)
            .map_err(|e| ProvisionError::Decode(e.to_string()))?;

        if !credentials.success {
            return Err(ProvisionError::Rejected);
        }

        info!(user = %credentials.irc_username, "IRC provisioning successful");
        Ok(credentials)
    }
}

impl fmt::Debug for HttpProvisioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProvisioner")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &self.auth_token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

#[async_trait]
impl CredentialSource for HttpProvisioner {
    async fn fetch(&self) -> Result<ProvisionedCredentials, ProvisionError> {
        self.provision().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        let client = reqwest::Client::new();
        let p = HttpProvisioner::with_client(client.clone(), "https://app.example/", None);
        assert_eq!(p.endpoint(), "https://app.example/api/irc-user-provision");

        let p = HttpProvisioner::with_client(client, "http://localhost:3000", None);
        assert_eq!(p.endpoint(), "http://localhost:3000/api/irc-user-provision");
    }

    #[test]
    fn test_error_body_tolerates_missing_fields() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_empty());
        assert!(body.details.is_none());
    }
}
