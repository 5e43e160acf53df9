//! A complete IRC identity for one application user.

use crate::{nickname, password, username, Password};

/// Username, nickname and password derived for one user session.
///
/// Values are never mutated after generation. On a collision the caller
/// generates a new identity (or adjusts the inputs) and tries again.
#[derive(Debug, Clone)]
pub struct Identity {
    /// IRC username (ident), also the bouncer account name.
    pub username: String,
    /// IRC nickname.
    pub nickname: String,
    /// Freshly generated plaintext password.
    pub password: Password,
}

impl Identity {
    /// Derive an identity from a display name and optional unique id.
    pub fn generate(display_name: &str, unique_id: Option<&str>) -> Self {
        Self {
            username: username(display_name, unique_id),
            nickname: nickname(display_name),
            password: password(),
        }
    }
}
