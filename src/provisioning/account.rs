//! Server-side account provisioning.
//!
//! Produces everything the provisioning endpoint needs for a new bouncer
//! account: a fresh identity, the credential to persist, and the response
//! to hand back to the client.

use super::ProvisionedCredentials;
use crate::error::CredentialError;
use crate::security::{Credential, hash_password};
use lounge_ident::Identity;
use tracing::info;

/// A freshly generated account, before persistence.
#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    pub identity: Identity,
    /// What the bouncer database stores.
    pub credential: Credential,
}

impl ProvisionedAccount {
    /// The response body for the client that requested the account.
    pub fn credentials(&self, network_name: &str) -> ProvisionedCredentials {
        ProvisionedCredentials {
            success: true,
            irc_username: self.identity.username.clone(),
            irc_password: self.identity.password.expose().to_string().into(),
            network_name: network_name.to_string(),
        }
    }
}

/// Generate an identity for a user and hash its password.
///
/// Collisions are not checked; a caller that finds `credential.username`
/// already taken decides how to resolve it.
pub fn provision_account(
    display_name: &str,
    unique_id: Option<&str>,
) -> Result<ProvisionedAccount, CredentialError> {
    let identity = Identity::generate(display_name, unique_id);
    let password_hash = hash_password(identity.password.expose())?;

    info!(user = %identity.username, nick = %identity.nickname, "Provisioned IRC account");

    Ok(ProvisionedAccount {
        credential: Credential {
            username: identity.username.clone(),
            password_hash,
        },
        identity,
    })
}
