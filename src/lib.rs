//! lounge-embed - provisioning and auto-login for an embedded The Lounge client.
//!
//! The host application renders The Lounge in an iframe. This crate supplies
//! the two values that iframe needs: an auto-login URL and a status signal
//! telling the shell whether to show a spinner, the chat, or a retry button.
//!
//! - [`provisioning`]: fetch live IRC credentials through a de-duplicating
//!   state machine ([`ProvisioningSession`]), plus server-side account setup
//! - [`lounge`]: assemble the iframe URL from credentials and a [`ChatTarget`]
//! - [`security`]: bcrypt hashing for the bouncer's credential store
//! - [`config`]: TOML configuration for the bundled binary
//!
//! Identity generation lives in the `lounge-ident` crate and is re-exported
//! as [`ident`].

pub mod config;
pub mod error;
pub mod lounge;
pub mod provisioning;
pub mod security;
pub mod telemetry;

pub use lounge_ident as ident;

pub use crate::error::{CredentialError, ProvisionError};
pub use crate::lounge::{ChatTarget, LoungeParams};
pub use crate::provisioning::{
    CredentialSource, HttpProvisioner, ProvisionedCredentials, ProvisioningSession, SessionStatus,
};
