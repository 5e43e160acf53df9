//! # lounge-ident
//!
//! Derives IRC-legal identities from arbitrary application user profiles.
//!
//! A host application knows its users by display name and an opaque unique
//! id. IRC networks are much stricter about what a username (ident) or a
//! nickname may contain, so this crate maps one onto the other:
//!
//! - [`username`]: lower-cased, forbidden characters replaced, optional id suffix
//! - [`nickname`]: RFC 2812 nickname alphabet, never starts with a digit or `-`
//! - [`password`]: 20 random alphanumeric characters, URL-safe as-is
//!
//! All generators are total. Collision handling is left to the caller: two
//! users sharing a display name will share a nickname.
//!
//! ```rust
//! use lounge_ident::{nickname, username, NickExt};
//!
//! assert_eq!(username("Alice Smith", Some("user_0042")), "alice_smith_0042");
//! assert_eq!(nickname("  9 Lives "), "u_9_lives");
//! assert!(nickname("Alice Smith").is_valid_nick());
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod identity;
pub mod nick;
pub mod password;
pub mod user;

pub use self::chan::{channel_slug, join_target, ChannelExt, MAX_CHANNEL_LEN};
pub use self::identity::Identity;
pub use self::nick::{nickname, NickExt, FALLBACK_NICK};
pub use self::password::{password, Password, PASSWORD_ALPHABET, PASSWORD_LEN};
pub use self::user::username;

/// Maximum length, in characters, of a generated username or nickname.
pub const MAX_IDENT_LEN: usize = 32;
