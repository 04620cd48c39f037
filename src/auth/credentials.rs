//! Login credentials type.

use std::fmt;

/// Login credentials for a PDS account.
///
/// Holds the identifier (handle or DID) and the password or app password.
/// Immutable after construction; the password is never exposed in Debug
/// output.
///
/// # Example
///
/// ```
/// use skypost::Credentials;
///
/// let creds = Credentials::new("alice.bsky.social", "app-password-here");
/// assert_eq!(creds.identifier(), "alice.bsky.social");
/// ```
#[derive(Clone)]
pub struct Credentials {
    identifier: String,
    password: String,
}

impl Credentials {
    /// Create new credentials from a handle (or DID) and password.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Returns the identifier (handle or DID).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the password, for constructing authentication requests only.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
