//! Error types for the skypost library.
//!
//! The two public operations map onto two top-level failure kinds:
//! session creation fails with [`Error::Authentication`] and record
//! creation fails with [`Error::PostCreation`]. Both wrap the same
//! lower-level [`RequestError`] so the underlying cause is never lost.

use std::fmt;
use thiserror::Error;

/// The unified error type for skypost operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Session creation failed (transport failure, non-2xx status, or a
    /// response missing the expected token fields).
    #[error("authentication failed: {0}")]
    Authentication(#[source] RequestError),

    /// Record creation failed (transport failure or non-2xx status).
    #[error("post creation failed: {0}")]
    PostCreation(#[source] RequestError),

    /// The PDS base URL did not validate.
    #[error("invalid PDS URL '{value}': {reason}")]
    InvalidPdsUrl { value: String, reason: String },
}

/// A failed XRPC request, before it is attributed to an operation.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Transport-level failure: connection, DNS, TLS, timeout, or an
    /// undecodable response body.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Status(ProtocolError),
}

/// A non-2xx XRPC response, with the structured error body when the
/// server provided one.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// XRPC error code (e.g. "AuthenticationRequired"), if present.
    pub error: Option<String>,
    /// Human-readable message from the server, if present.
    pub message: Option<String>,
}

impl ProtocolError {
    pub(crate) fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_server_detail() {
        let err = ProtocolError::new(
            401,
            Some("AuthenticationRequired".to_string()),
            Some("Invalid identifier or password".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("AuthenticationRequired"));
        assert!(text.contains("Invalid identifier or password"));
    }

    #[test]
    fn protocol_error_display_without_body() {
        let err = ProtocolError::new(502, None, None);
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
