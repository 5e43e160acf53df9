//! Embedding The Lounge: auto-login URLs, channel targets, panel state.
//!
//! - [`url`]: query-string assembly for the iframe `src`
//! - [`channel`]: host channel records and [`ChatTarget`] resolution
//! - [`panel`]: open/close value object and display mode

pub mod channel;
pub mod panel;
pub mod url;

pub use self::channel::{ChatChannel, ChatMode, ChatTarget, DEFAULT_CHAT_BASE_URL, Theme};
pub use self::panel::{ChatPanelState, DisplayMode};
pub use self::url::{LoungeParams, REDACTED, build, redacted};
