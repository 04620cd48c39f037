//! skypost - minimal Bluesky posting client
//!
//! Authenticates against an AT Protocol PDS and posts text records, with
//! hashtags annotated as rich-text facets using UTF-8 byte-offset spans.
//!
//! Two pieces:
//!
//! - [`extract_facets`] — pure text-to-facets extraction
//! - [`PostClient`] — the authenticate-then-post flow
//!
//! # Example
//!
//! ```no_run
//! use skypost::{Credentials, PdsUrl, PostClient};
//!
//! # async fn example() -> Result<(), skypost::Error> {
//! let pds = PdsUrl::new("https://bsky.social")?;
//! let credentials = Credentials::new("alice.bsky.social", "app-password");
//! let client = PostClient::new(pds, credentials);
//!
//! client.create_post("good morning #coffee").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Deliberately out of scope: token refresh, retries, rate limiting, and
//! record types other than plain text posts. Every `create_post` call
//! performs its own authentication round-trip.

pub mod auth;
pub mod client;
pub mod error;
pub mod record;
pub mod richtext;
pub mod types;

mod xrpc;

pub use auth::{Credentials, Session};
pub use client::PostClient;
pub use error::{Error, ProtocolError, RequestError};
pub use record::{FEED_POST_COLLECTION, PostRecord};
pub use richtext::{ByteSlice, Facet, FacetFeature, extract_facets};
pub use types::PdsUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
