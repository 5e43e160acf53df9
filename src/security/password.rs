//! Password hashing and verification utilities.
//!
//! Centralizes bcrypt handling for provisioned IRC accounts. The bouncer
//! (soju) reads these hashes directly, so the format is the standard `$2b$`
//! modular-crypt string at a fixed cost.

use crate::error::CredentialError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// bcrypt work factor. Matches the cost of hashes already in the bouncer
/// database.
pub const HASH_COST: u32 = 10;

/// An encoded, salted password hash. Opaque to everything but [`verify_password`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash loaded from storage. The value is not checked here;
    /// a malformed hash simply never verifies.
    pub fn from_stored(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded hash as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prefix only: algorithm and cost, no salt or digest.
        let head = self.0.get(..7).unwrap_or("");
        write!(f, "PasswordHash({head}...)")
    }
}

/// A persisted IRC account credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bouncer account name, as produced by the username generator.
    pub username: String,
    /// bcrypt hash of the account password.
    pub password_hash: PasswordHash,
}

/// Hash a password with a fresh random salt.
///
/// Two calls with the same input produce different encodings that both
/// verify against it. Inputs longer than 72 bytes are refused rather than
/// silently truncated.
pub fn hash_password(password: &str) -> Result<PasswordHash, CredentialError> {
    Ok(PasswordHash(bcrypt::non_truncating_hash(
        password, HASH_COST,
    )?))
}

/// Verify a password against a stored bcrypt hash.
///
/// The digest comparison is constant-time. A malformed or truncated hash is
/// a mismatch, not an error, and so is an input longer than 72 bytes.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::non_truncating_verify(password, hash).unwrap_or(false)
}
