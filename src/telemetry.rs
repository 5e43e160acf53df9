//! Standardized span constructors for provisioning observability.

pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for one provisioning attempt.
    pub fn provisioning(attempt: u64) -> Span {
        info_span!("provisioning", attempt = attempt)
    }

    /// Create a span for an outbound provisioning request.
    pub fn request(endpoint: &str) -> Span {
        info_span!("provision_request", endpoint = %endpoint)
    }
}
