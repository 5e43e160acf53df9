//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_chat_base_url, default_timeout_secs, default_true};
use crate::lounge::{ChatMode, ChatTarget, Theme};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Embedded client and channel selection.
    pub chat: ChatConfig,
    /// Credential provisioning endpoint.
    pub provisioning: ProvisioningConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Embedded client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Base URL of The Lounge instance (default: https://chat.curia.network).
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    /// Channel to join, without `#`.
    pub channel: String,
    /// Client theme. Omitted from the URL when unset.
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Client layout. Omitted from the URL when unset.
    #[serde(default)]
    pub mode: Option<ChatMode>,
    /// Keep the client from grabbing focus on load (default: true).
    #[serde(default = "default_true")]
    pub nofocus: bool,
    /// Pin the client to the joined channel.
    #[serde(default)]
    pub lockchannel: bool,
}

impl ChatConfig {
    /// The chat target this configuration describes.
    pub fn target(&self) -> ChatTarget {
        ChatTarget {
            base_url: self.base_url.clone(),
            channel_name: self.channel.clone(),
            theme: self.theme,
            mode: self.mode,
            nofocus: self.nofocus,
            lockchannel: self.lockchannel,
        }
    }
}

/// Provisioning endpoint configuration.
#[derive(Clone, Deserialize)]
pub struct ProvisioningConfig {
    /// Host API base URL; the endpoint path is appended.
    pub api_base_url: String,
    /// Bearer token sent with the request, if any.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProvisioningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisioningConfig")
            .field("api_base_url", &self.api_base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| crate::lounge::REDACTED))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
