//! PDS base URL type.

use std::fmt;
use url::Url;

use crate::error::Error;

/// A validated PDS (Personal Data Server) base URL.
///
/// Guarantees the URL is absolute with a host and uses HTTPS, with HTTP
/// permitted for localhost so tests can point at a local mock server.
///
/// # Example
///
/// ```
/// use skypost::PdsUrl;
///
/// let pds = PdsUrl::new("https://bsky.social").unwrap();
/// assert_eq!(
///     pds.xrpc_url("com.atproto.server.createSession"),
///     "https://bsky.social/xrpc/com.atproto.server.createSession"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdsUrl(Url);

impl PdsUrl {
    /// Parse and validate a PDS base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPdsUrl`] if the string is not an absolute
    /// https URL (or http on localhost) with a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let invalid = |reason: &str| Error::InvalidPdsUrl {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(s).map_err(|e| invalid(&e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }
        let Some(host) = url.host_str() else {
            return Err(invalid("must have a host"));
        };
        let is_localhost = host == "localhost" || host == "127.0.0.1" || host == "::1";
        if url.scheme() != "https" && !(url.scheme() == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        Ok(Self(url))
    }

    /// Returns the full endpoint URL for an XRPC method.
    pub fn xrpc_url(&self, method: &str) -> String {
        // Url renders a bare origin with a trailing slash; strip it so the
        // path is always exactly /xrpc/<method>.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/xrpc/{}", base, method)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PdsUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
