//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Longest channel name, prefix included, that networks accept.
pub const MAX_CHANNEL_LEN: usize = 50;

/// Check whether a string can be sent as a `JOIN` target.
pub trait ChannelExt {
    /// A prefix of `#`, `&`, `+` or `!`, then no space, comma or control
    /// character, and at most [`MAX_CHANNEL_LEN`] characters in total.
    fn is_channel_name(&self) -> bool;
}

impl<T: AsRef<str> + ?Sized> ChannelExt for T {
    fn is_channel_name(&self) -> bool {
        let name = self.as_ref();
        let Some(rest) = name.strip_prefix(['#', '&', '+', '!']) else {
            return false;
        };
        name.chars().count() <= MAX_CHANNEL_LEN
            && !rest.chars().any(|c| c == ' ' || c == ',' || c.is_control())
    }
}

/// The `join` target for a bare channel name: `#` prepended.
///
/// The name is not validated; callers that need a protocol-legal name
/// should check the result with [`ChannelExt::is_channel_name`].
pub fn join_target(channel_name: &str) -> String {
    format!("#{channel_name}")
}

/// Slug a community name into a channel name.
///
/// Lower-cases the name and replaces everything outside `[a-z0-9]` with `-`.
/// Older hosts derived channel names this way before channels carried an
/// explicit IRC name.
///
/// ```
/// use lounge_ident::channel_slug;
///
/// assert_eq!(channel_slug("Rust Users!"), "rust-users-");
/// ```
pub fn channel_slug(community_name: &str) -> String {
    community_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}
