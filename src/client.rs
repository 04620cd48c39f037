//! The posting client: authenticate, then create the record.

use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::auth::{AccessToken, Credentials, RefreshToken, Session};
use crate::error::Error;
use crate::record::{FEED_POST_COLLECTION, PostRecord};
use crate::types::PdsUrl;
use crate::xrpc::{
    CREATE_RECORD, CREATE_SESSION, CreateRecordRequest, CreateSessionRequest,
    CreateSessionResponse, XrpcClient,
};

/// A client that posts to a Bluesky account.
///
/// Holds immutable [`Credentials`] and a PDS handle; authentication state
/// lives in the [`Session`] values the client returns, not in the client
/// itself, so a `PostClient` can be shared freely across tasks.
///
/// [`create_post`](Self::create_post) re-authenticates on every call — a
/// fresh session per post, no caching. Callers who want session reuse can
/// call [`authenticate`](Self::authenticate) themselves and hold the
/// returned `Session`, but this client never does.
///
/// # Example
///
/// ```no_run
/// use skypost::{Credentials, PdsUrl, PostClient};
///
/// # async fn example() -> Result<(), skypost::Error> {
/// let pds = PdsUrl::new("https://bsky.social")?;
/// let credentials = Credentials::new("alice.bsky.social", "app-password");
/// let client = PostClient::new(pds, credentials);
///
/// let response = client.create_post("hello from rust #atproto").await?;
/// println!("created: {:?}", response.get("uri"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PostClient {
    credentials: Credentials,
    xrpc: XrpcClient,
}

impl PostClient {
    /// Create a client for the given PDS and account.
    pub fn new(pds: PdsUrl, credentials: Credentials) -> Self {
        Self {
            credentials,
            xrpc: XrpcClient::new(pds),
        }
    }

    /// Authenticate with the PDS and return a fresh session.
    ///
    /// Sends the identifier and password to createSession. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] on transport failure, a non-2xx
    /// status, or a response missing `accessJwt`/`refreshJwt`.
    #[instrument(skip(self), fields(identifier = %self.credentials.identifier()))]
    pub async fn authenticate(&self) -> Result<Session, Error> {
        info!("creating session");

        let request = CreateSessionRequest {
            identifier: self.credentials.identifier(),
            password: self.credentials.password(),
        };

        let response: CreateSessionResponse = self
            .xrpc
            .procedure(CREATE_SESSION, &request)
            .await
            .map_err(Error::Authentication)?;

        debug!(did = %response.did, "session created");

        Ok(Session::new(
            response.did,
            AccessToken::new(response.access_jwt),
            RefreshToken::new(response.refresh_jwt),
        ))
    }

    /// Post text to the account's feed, annotating hashtags as facets.
    ///
    /// Authenticates first (every call, unconditionally), extracts hashtag
    /// facets from `text`, and sends an `app.bsky.feed.post` record
    /// stamped with the current UTC time. Returns the server's response
    /// body (record URI, CID, and whatever else it includes) as a JSON
    /// object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the session step fails — the
    /// record request is not attempted — and [`Error::PostCreation`] if
    /// the record step fails, preserving the server's failure detail.
    #[instrument(skip(self, text))]
    pub async fn create_post(&self, text: &str) -> Result<Map<String, Value>, Error> {
        let session = self.authenticate().await?;

        let record = PostRecord::new(text);
        debug!(facets = record.facets.len(), "sending post");

        let request = CreateRecordRequest {
            repo: self.credentials.identifier(),
            collection: FEED_POST_COLLECTION,
            record: &record,
        };

        let response: Map<String, Value> = self
            .xrpc
            .procedure_authed(CREATE_RECORD, &request, session.access_token().as_str())
            .await
            .map_err(Error::PostCreation)?;

        info!(uri = response.get("uri").and_then(serde_json::Value::as_str), "post created");

        Ok(response)
    }
}
