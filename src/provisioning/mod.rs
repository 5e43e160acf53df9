//! IRC credential provisioning.
//!
//! - [`session`]: the Loading/Ready/Error state machine around one fetch
//! - [`source`]: the [`CredentialSource`] seam the session calls through
//! - [`client`]: [`HttpProvisioner`], the bundled HTTP source
//! - [`account`]: server-side identity + hash generation for new accounts

pub mod account;
pub mod client;
pub mod session;
pub mod source;
mod types;

pub use account::{ProvisionedAccount, provision_account};
pub use client::HttpProvisioner;
pub use session::ProvisioningSession;
pub use source::CredentialSource;
pub use types::{ProvisionedCredentials, SessionStatus};
