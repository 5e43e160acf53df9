//! Unified error handling for lounge-embed.
//!
//! Identity and URL generation are total and have no error type. What can
//! fail is hashing (fatal, propagated) and provisioning (normalized into a
//! session status, never raised past the session).

use thiserror::Error;

/// Message used when a provisioning failure carries no text of its own.
pub const GENERIC_PROVISION_FAILURE: &str = "Failed to connect to chat";

// ============================================================================
// Credential Errors (hashing)
// ============================================================================

/// Errors from the credential store.
///
/// Only hashing can fail. Verification folds every problem, including a
/// malformed stored hash, into a negative result.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

// ============================================================================
// Provisioning Errors (credential fetch)
// ============================================================================

/// Errors from a credential fetch.
///
/// The `Display` text is what the UI shows next to its retry action.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("IRC provisioning failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IRC provisioning failed: {message}")]
    Status { status: u16, message: String },

    #[error("IRC provisioning failed: Invalid response format")]
    Rejected,

    #[error("IRC provisioning failed: {0}")]
    Decode(String),

    /// Failure text from a caller-supplied fetch, shown as-is.
    #[error("{0}")]
    Message(String),
}

impl ProvisionError {
    /// Wrap caller-supplied failure text.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Request(e) if e.is_timeout() => "timeout",
            Self::Request(_) => "request",
            Self::Status { .. } => "http_status",
            Self::Rejected => "rejected",
            Self::Decode(_) => "decode",
            Self::Message(_) => "source",
        }
    }

    /// The text to put into an error status, falling back to
    /// [`GENERIC_PROVISION_FAILURE`] when there is none.
    pub fn status_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_PROVISION_FAILURE.to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_message_passes_through() {
        let err = ProvisionError::message("network down");
        assert_eq!(err.status_message(), "network down");
        assert_eq!(err.error_code(), "source");
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            ProvisionError::message("  ").status_message(),
            GENERIC_PROVISION_FAILURE
        );
    }

    #[test]
    fn test_status_and_rejected_text() {
        let err = ProvisionError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "IRC provisioning failed: Unauthorized");
        assert_eq!(
            ProvisionError::Rejected.to_string(),
            "IRC provisioning failed: Invalid response format"
        );
    }
}
