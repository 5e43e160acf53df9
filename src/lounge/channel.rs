//! Host channel records and chat target resolution.
//!
//! The host application describes each chat channel with a JSON record.
//! [`ChatTarget`] turns one of those, plus caller overrides, into the values
//! the URL builder needs.

use super::url::{self, LoungeParams};
use crate::provisioning::ProvisionedCredentials;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client base URL used when neither the caller nor config supplies one.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://chat.curia.network";

/// Color theme passed through to the web client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Theme preference stored in channel settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// The concrete theme, if the preference names one.
    pub fn resolve(self) -> Option<Theme> {
        match self {
            Self::Auto => None,
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
        }
    }
}

/// Client layout: one locked channel, or the full network view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    Single,
    Normal,
}

impl ChatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Normal => "normal",
        }
    }
}

/// A chat channel as returned by the host API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: i64,
    pub community_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Channel name on the IRC network, without `#`.
    pub irc_channel_name: String,
    pub is_single_mode: bool,
    pub is_default: bool,
    #[serde(default)]
    pub settings: ChannelSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSettings {
    pub irc: Option<IrcSettings>,
    pub ui: Option<UiSettings>,
    pub permissions: Option<PermissionSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrcSettings {
    pub autoconnect: Option<bool>,
    pub lockchannel: Option<bool>,
    pub nofocus: Option<bool>,
    pub welcome_message: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    pub default_theme: Option<ThemePreference>,
    pub allow_theme_switch: Option<bool>,
    pub show_user_list: Option<bool>,
    pub allow_mentions: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSettings {
    pub allowed_roles: Option<Vec<String>>,
    pub locks: Option<LockSettings>,
}

/// Lock gating: membership requires holding any/all of the listed locks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockSettings {
    pub lock_ids: Option<Vec<i64>>,
    pub fulfillment: Option<LockFulfillment>,
    pub verification_duration: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockFulfillment {
    Any,
    All,
}

impl ChatChannel {
    fn irc(&self) -> Option<&IrcSettings> {
        self.settings.irc.as_ref()
    }

    /// Theme from the channel's UI settings, when it names a concrete one.
    pub fn preferred_theme(&self) -> Option<Theme> {
        self.settings
            .ui
            .as_ref()
            .and_then(|ui| ui.default_theme)
            .and_then(ThemePreference::resolve)
    }
}

/// Where and how to open the chat. Immutable per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTarget {
    pub base_url: String,
    /// Channel name without `#`.
    pub channel_name: String,
    pub theme: Option<Theme>,
    pub mode: Option<ChatMode>,
    pub nofocus: bool,
    pub lockchannel: bool,
}

impl ChatTarget {
    /// A target with no theme or mode, focus suppressed, channel unlocked.
    pub fn new(base_url: impl Into<String>, channel_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            channel_name: channel_name.into(),
            theme: None,
            mode: None,
            nofocus: true,
            lockchannel: false,
        }
    }

    /// Resolve a target for a host channel record.
    ///
    /// Caller overrides win. Otherwise the base URL falls back to
    /// [`DEFAULT_CHAT_BASE_URL`], the theme to the channel's preference and
    /// then light, the mode to the channel's `is_single_mode` flag, and
    /// `nofocus`/`lockchannel` to the channel's IRC settings (`true`/`false`
    /// when unset).
    pub fn for_channel(
        channel: &ChatChannel,
        base_url: Option<&str>,
        theme: Option<Theme>,
        mode: Option<ChatMode>,
    ) -> Self {
        let irc = channel.irc();
        let mode = mode.unwrap_or(if channel.is_single_mode {
            ChatMode::Single
        } else {
            ChatMode::Normal
        });

        Self {
            base_url: base_url.unwrap_or(DEFAULT_CHAT_BASE_URL).to_string(),
            channel_name: channel.irc_channel_name.clone(),
            theme: Some(theme.or_else(|| channel.preferred_theme()).unwrap_or_default()),
            mode: Some(mode),
            nofocus: irc.and_then(|s| s.nofocus).unwrap_or(true),
            lockchannel: irc.and_then(|s| s.lockchannel).unwrap_or(false),
        }
    }

    /// Combine with provisioned credentials. The IRC username doubles as nick.
    pub fn lounge_params<'a>(&'a self, credentials: &'a ProvisionedCredentials) -> LoungeParams<'a> {
        LoungeParams {
            base_url: &self.base_url,
            irc_username: &credentials.irc_username,
            irc_password: &credentials.irc_password,
            network_name: &credentials.network_name,
            user_nick: &credentials.irc_username,
            channel_name: &self.channel_name,
            nofocus: self.nofocus,
            theme: self.theme,
            mode: self.mode,
            lockchannel: self.lockchannel,
        }
    }

    /// The iframe `src` for these credentials.
    pub fn url(&self, credentials: &ProvisionedCredentials) -> String {
        url::build(&self.lounge_params(credentials))
    }

    /// [`ChatTarget::url`] with the password redacted, for logs.
    pub fn redacted_url(&self, credentials: &ProvisionedCredentials) -> String {
        url::redacted(&self.lounge_params(credentials))
    }
}
