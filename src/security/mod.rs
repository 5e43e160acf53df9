//! Security module for lounge-embed.
//!
//! Holds the credential store: one-way, salted hashing of IRC account
//! passwords for the bouncer database, and constant-time verification.

pub mod password;

pub use password::{Credential, HASH_COST, PasswordHash, hash_password, verify_password};
