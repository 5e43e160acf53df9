//! Random IRC account passwords.
//!
//! Passwords travel inside a query string to the web client, so the alphabet
//! is restricted to characters that never need percent-encoding.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;
use zeroize::Zeroizing;

/// Length of a generated password.
pub const PASSWORD_LEN: usize = 20;

/// The 62 characters a generated password is drawn from.
pub const PASSWORD_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A generated plaintext password.
///
/// The buffer is wiped on drop and `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Borrow the plaintext.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// Generate a fresh password of [`PASSWORD_LEN`] characters.
///
/// Characters are sampled uniformly from [`PASSWORD_ALPHABET`] using the
/// thread-local CSPRNG (ChaCha, reseeded from the OS).
pub fn password() -> Password {
    let secret: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PASSWORD_LEN)
        .map(char::from)
        .collect();
    Password(Zeroizing::new(secret))
}
