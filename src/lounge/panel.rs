//! Caller-owned chat panel state.
//!
//! The host keeps one of these per view and passes it down explicitly;
//! nothing here is global.

use serde::{Deserialize, Serialize};

/// How the embedding is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Overlay with backdrop; locks page scroll and closes on Escape.
    #[default]
    Modal,
    /// Rendered inline as the page's main content.
    FullPage,
}

impl DisplayMode {
    /// Whether the shell should draw a backdrop, lock scroll and trap Escape.
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Modal)
    }
}

/// Open/closed state plus the channel to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPanelState {
    pub is_open: bool,
    pub selected_channel_id: Option<i64>,
}

impl ChatPanelState {
    /// Open the panel, optionally on a specific channel. `None` keeps the
    /// host's default channel.
    pub fn open(&mut self, channel_id: Option<i64>) {
        self.is_open = true;
        self.selected_channel_id = channel_id;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.selected_channel_id = None;
    }
}
