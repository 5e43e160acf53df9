//! Username (ident) generation.
//!
//! RFC 2812 is permissive about usernames: anything except NUL, CR, LF,
//! space and `@`. Bouncers in practice also choke on other whitespace and
//! control characters, so those are replaced too.

use crate::MAX_IDENT_LEN;

/// Number of trailing id characters appended as a collision-reducing suffix.
const ID_SUFFIX_LEN: usize = 4;

#[inline]
fn is_forbidden(c: char) -> bool {
    c.is_whitespace() || c == '@' || c.is_ascii_control()
}

/// Derive an IRC username from a display name.
///
/// The name is lower-cased and every whitespace, `@` or ASCII control
/// character (DEL included) becomes `_`. When `unique_id` is given, `_` and
/// its last four characters are appended before the result is capped at
/// [`MAX_IDENT_LEN`] characters.
///
/// No uniqueness check happens here; an empty or underscore-only result is
/// possible and left for the caller to detect.
///
/// ```
/// use lounge_ident::username;
///
/// assert_eq!(username("Alice Smith", None), "alice_smith");
/// assert_eq!(username("bob", Some("cus_8f3a91")), "bob_3a91");
/// ```
pub fn username(display_name: &str, unique_id: Option<&str>) -> String {
    let mut raw = display_name.to_lowercase();

    if let Some(id) = unique_id {
        let count = id.chars().count();
        raw.push('_');
        raw.extend(id.chars().skip(count.saturating_sub(ID_SUFFIX_LEN)));
    }

    raw.chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .take(MAX_IDENT_LEN)
        .collect()
}
