//! Default value functions for configuration.

use crate::lounge::DEFAULT_CHAT_BASE_URL;

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

pub fn default_chat_base_url() -> String {
    DEFAULT_CHAT_BASE_URL.to_string()
}

pub fn default_timeout_secs() -> u64 {
    10
}
