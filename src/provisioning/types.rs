//! Provisioning data types.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Live credentials returned by the provisioning endpoint.
///
/// Held by a session for its lifetime only. The password buffer is wiped
/// on drop and `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedCredentials {
    pub success: bool,
    pub irc_username: String,
    pub irc_password: Zeroizing<String>,
    pub network_name: String,
}

impl fmt::Debug for ProvisionedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionedCredentials")
            .field("success", &self.success)
            .field("irc_username", &self.irc_username)
            .field("irc_password", &crate::lounge::REDACTED)
            .field("network_name", &self.network_name)
            .finish()
    }
}

/// Where a provisioning session stands.
///
/// Per attempt the only transitions are `Loading -> Ready` and
/// `Loading -> Error`; starting a new attempt goes back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Ready { credentials: ProvisionedCredentials },
    Error { message: String },
}

impl SessionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// The UI offers a retry action exactly when this is true.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn credentials(&self) -> Option<&ProvisionedCredentials> {
        match self {
            Self::Ready { credentials } => Some(credentials),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_wire_format() {
        let creds: ProvisionedCredentials = serde_json::from_value(json!({
            "success": true,
            "ircUsername": "alice_0042",
            "ircPassword": "s3cr3t",
            "networkName": "curia"
        }))
        .unwrap();
        assert_eq!(creds.irc_username, "alice_0042");
        assert_eq!(creds.network_name, "curia");

        let shown = format!("{:?}", SessionStatus::Ready { credentials: creds });
        assert!(!shown.contains("s3cr3t"));
    }

    #[test]
    fn test_password_is_zeroizing_and_round_trips() {
        let creds: ProvisionedCredentials = serde_json::from_value(json!({
            "success": true,
            "ircUsername": "bob",
            "ircPassword": "hunter2",
            "networkName": "curia"
        }))
        .unwrap();
        let held: &Zeroizing<String> = &creds.irc_password;
        assert_eq!(held.as_str(), "hunter2");

        let wire = serde_json::to_value(&creds).unwrap();
        assert_eq!(wire["ircPassword"], "hunter2");
    }

    #[test]
    fn test_status_accessors() {
        let err = SessionStatus::Error {
            message: "boom".to_string(),
        };
        assert!(err.is_error());
        assert_eq!(err.error_message(), Some("boom"));
        assert!(err.credentials().is_none());
        assert!(SessionStatus::Loading.is_loading());
    }
}
