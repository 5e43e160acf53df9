//! The Lounge auto-login URL construction.
//!
//! The web client reads its connection settings from the query string. Keys
//! are emitted in a fixed order:
//!
//! ```text
//! password, autoconnect, nick, username, realname, join,
//! [theme], [mode], [nofocus], [lockchannel]
//! ```
//!
//! Bracketed keys appear only when set. Every value goes through
//! `application/x-www-form-urlencoded` encoding, so a channel name holding
//! `&`, `#` or `=` stays inside its own slot.

use super::channel::{ChatMode, Theme};
use lounge_ident::join_target;
use std::fmt;
use tracing::debug;
use url::form_urlencoded;

/// Placeholder rendered instead of the password in log output.
pub const REDACTED: &str = "[redacted]";

/// Inputs for one auto-login URL.
#[derive(Clone, Copy)]
pub struct LoungeParams<'a> {
    pub base_url: &'a str,
    pub irc_username: &'a str,
    pub irc_password: &'a str,
    pub network_name: &'a str,
    pub user_nick: &'a str,
    /// Channel name without the `#` prefix.
    pub channel_name: &'a str,
    pub nofocus: bool,
    pub theme: Option<Theme>,
    pub mode: Option<ChatMode>,
    pub lockchannel: bool,
}

impl fmt::Debug for LoungeParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoungeParams")
            .field("base_url", &self.base_url)
            .field("irc_username", &self.irc_username)
            .field("irc_password", &REDACTED)
            .field("network_name", &self.network_name)
            .field("user_nick", &self.user_nick)
            .field("channel_name", &self.channel_name)
            .field("nofocus", &self.nofocus)
            .field("theme", &self.theme)
            .field("mode", &self.mode)
            .field("lockchannel", &self.lockchannel)
            .finish()
    }
}

/// Build the auto-login URL: `base_url?query`.
///
/// Pure apart from a debug log line, which carries only the redacted form.
pub fn build(params: &LoungeParams<'_>) -> String {
    let url = render(params, params.irc_password);
    debug!(
        user = %params.irc_username,
        url = %render(params, REDACTED),
        "Built Lounge URL"
    );
    url
}

/// The same URL as [`build`], with the password replaced by [`REDACTED`].
pub fn redacted(params: &LoungeParams<'_>) -> String {
    render(params, REDACTED)
}

fn render(params: &LoungeParams<'_>, password: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("password", password)
        .append_pair("autoconnect", "true")
        .append_pair("nick", params.user_nick)
        .append_pair(
            "username",
            &format!("{}/{}", params.irc_username, params.network_name),
        )
        .append_pair("realname", params.user_nick)
        .append_pair("join", &join_target(params.channel_name));

    if let Some(theme) = params.theme {
        query.append_pair("theme", theme.as_str());
    }
    if let Some(mode) = params.mode {
        query.append_pair("mode", mode.as_str());
    }
    if params.nofocus {
        query.append_pair("nofocus", "true");
    }
    if params.lockchannel {
        query.append_pair("lockchannel", "true");
    }

    format!("{}?{}", params.base_url, query.finish())
}
