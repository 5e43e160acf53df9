//! Nickname generation and validation.
//!
//! Nicknames follow the RFC 2812 grammar:
//!
//! ```text
//! nickname = ( letter / special ) *( letter / digit / special / "-" )
//! special  = "[" / "]" / "\" / "`" / "_" / "^" / "{" / "|" / "}"
//! ```
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format (nickname definition)

use crate::MAX_IDENT_LEN;

/// Nickname used when a display name has nothing usable in it.
pub const FALLBACK_NICK: &str = "user";

/// Prefix that keeps a nickname from starting with a digit or hyphen.
const LEADING_GUARD: &str = "u_";

/// Grammar check for generated and user-supplied nicknames.
pub trait NickExt {
    /// Check against the grammar with the generator's length limit.
    ///
    /// ```
    /// use lounge_ident::NickExt;
    ///
    /// assert!("u_9_lives".is_valid_nick());
    /// assert!(!"9_lives".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;

    fn is_valid_nick_len(&self, max_len: usize) -> bool;
}

/// Special characters allowed anywhere in a nickname.
#[inline]
fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '\\' | '`' | '_' | '^' | '{' | '|' | '}')
}

#[inline]
fn is_nick_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_special(c)
}

#[inline]
fn is_nick_char(c: char) -> bool {
    is_nick_start(c) || c.is_ascii_digit() || c == '-'
}

impl<T: AsRef<str> + ?Sized> NickExt for T {
    fn is_valid_nick(&self) -> bool {
        self.is_valid_nick_len(MAX_IDENT_LEN)
    }

    fn is_valid_nick_len(&self, max_len: usize) -> bool {
        let nick = self.as_ref();
        let mut chars = nick.chars();
        nick.len() <= max_len && chars.next().is_some_and(is_nick_start) && chars.all(is_nick_char)
    }
}

/// Derive an IRC nickname from a display name.
///
/// The name is trimmed and lower-cased, and every character outside the
/// nickname alphabet becomes `_`. A result starting with a digit or `-` gets
/// a `u_` prefix. A name with no usable characters at all (empty, or made up
/// only of forbidden characters) yields [`FALLBACK_NICK`]. The result is
/// capped at [`MAX_IDENT_LEN`] characters.
///
/// ```
/// use lounge_ident::nickname;
///
/// assert_eq!(nickname("Alice Smith"), "alice_smith");
/// assert_eq!(nickname("-dash"), "u_-dash");
/// assert_eq!(nickname("   "), "user");
/// assert_eq!(nickname("@@!"), "user");
/// ```
pub fn nickname(display_name: &str) -> String {
    let lowered = display_name.trim().to_lowercase();

    let mut kept = 0usize;
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if is_nick_char(c) {
            kept += 1;
            cleaned.push(c);
        } else {
            cleaned.push('_');
        }
    }

    if kept == 0 {
        return FALLBACK_NICK.to_string();
    }

    let needs_guard = cleaned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-');

    let guarded = if needs_guard {
        format!("{LEADING_GUARD}{cleaned}")
    } else {
        cleaned
    };

    // Output is ASCII at this point, so a byte cut is a char cut.
    let mut nick = guarded;
    nick.truncate(MAX_IDENT_LEN);
    nick
}
