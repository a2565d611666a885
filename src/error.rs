//! Error types for the landing service
//!
//! Two error classes exist by design: configuration faults caught at
//! startup, and relay faults surfaced to the contact endpoint as a generic
//! server error. Data-layer failures on the page path are deliberately not
//! an error type. They are the `Unavailable` arm of
//! [`crate::store::ProfileLookup`] so the fail-soft fallback is an explicit
//! branch rather than a caught exception.

use thiserror::Error;

/// Environment configuration errors, raised at startup only.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable is set but unusable.
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Outbound mail relay errors.
///
/// The contact endpoint maps every variant to a generic 500 with no detail
/// leakage; the cause is logged server-side for operator visibility.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Transport session could not be constructed.
    #[error("mail transport error: {0}")]
    Transport(String),

    /// Message could not be composed (bad configured addresses).
    #[error("mail compose error: {0}")]
    Compose(String),

    /// Hand-off to the relay failed. No retry, no queueing.
    #[error("mail send failed: {0}")]
    Send(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::Missing("SMTP_HOST");
        assert_eq!(err.to_string(), "missing environment variable: SMTP_HOST");

        let err = ConfigError::Invalid {
            name: "SMTP_PORT",
            reason: "not a number".to_string(),
        };
        assert!(err.to_string().contains("SMTP_PORT"));
    }

    #[test]
    fn relay_error_display() {
        let err = RelayError::Send("connection refused".to_string());
        assert_eq!(err.to_string(), "mail send failed: connection refused");
    }
}
