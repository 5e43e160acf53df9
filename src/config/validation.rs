//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use lounge_ident::{ChannelExt, join_target};
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("chat.base_url must be an http(s) URL, got '{0}'")]
    InvalidChatBaseUrl(String),
    #[error("chat.channel is required")]
    MissingChannel,
    #[error("chat.channel is not a valid IRC channel name: '{0}'")]
    InvalidChannel(String),
    #[error("provisioning.api_base_url must be an http(s) URL, got '{0}'")]
    InvalidApiBaseUrl(String),
    #[error("provisioning.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

fn is_http_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_http_url(&config.chat.base_url) {
        errors.push(ValidationError::InvalidChatBaseUrl(
            config.chat.base_url.clone(),
        ));
    }

    // The URL builder prepends '#' itself
    let channel = &config.chat.channel;
    if channel.is_empty() {
        errors.push(ValidationError::MissingChannel);
    } else if !join_target(channel).is_channel_name() {
        errors.push(ValidationError::InvalidChannel(channel.clone()));
    }

    if !is_http_url(&config.provisioning.api_base_url) {
        errors.push(ValidationError::InvalidApiBaseUrl(
            config.provisioning.api_base_url.clone(),
        ));
    }

    if config.provisioning.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
