//! Session and token value types.

use std::fmt;

/// An access token for authenticated XRPC requests.
///
/// Short-lived JWT; treat as opaque. Never shown in Debug output.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token returned by session creation.
///
/// Stored for completeness; this crate never exchanges it (no refresh
/// flow — every post re-authenticates). Never shown in Debug output.
#[derive(Clone)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// An authenticated session, as returned by
/// [`PostClient::authenticate`](crate::PostClient::authenticate).
///
/// A plain value: it holds the tokens from one createSession call and the
/// DID the server resolved for the account. It carries no connection state
/// and never refreshes itself; each `authenticate()` call yields a fresh
/// one.
#[derive(Clone)]
pub struct Session {
    did: String,
    access_token: AccessToken,
    refresh_token: RefreshToken,
}

impl Session {
    pub(crate) fn new(
        did: String,
        access_token: AccessToken,
        refresh_token: RefreshToken,
    ) -> Self {
        Self {
            did,
            access_token,
            refresh_token,
        }
    }

    /// Returns the DID of the authenticated account.
    pub fn did(&self) -> &str {
        &self.did
    }

    pub(crate) fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("did", &self.did)
            .field("access_token", &self.access_token)
            .field("refresh_token", &self.refresh_token)
            .finish()
    }
}
