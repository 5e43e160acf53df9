//! The credential fetch seam.
//!
//! The transport behind a fetch (endpoint, headers, auth token) belongs to
//! the host. A session only needs something it can call for credentials.

use super::ProvisionedCredentials;
use crate::error::ProvisionError;
use async_trait::async_trait;
use std::future::Future;

/// Something that can fetch live IRC credentials.
#[async_trait]
pub trait CredentialSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<ProvisionedCredentials, ProvisionError>;
}

/// Any async closure returning credentials is a source.
#[async_trait]
impl<F, Fut> CredentialSource for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ProvisionedCredentials, ProvisionError>> + Send + 'static,
{
    async fn fetch(&self) -> Result<ProvisionedCredentials, ProvisionError> {
        (self)().await
    }
}
