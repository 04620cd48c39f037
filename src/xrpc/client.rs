//! XRPC HTTP client.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use crate::error::{ProtocolError, RequestError};
use crate::types::PdsUrl;

use super::endpoints::XrpcErrorResponse;

/// Thin wrapper over reqwest for XRPC procedures against one PDS.
///
/// Errors come back as [`RequestError`]; attributing them to an operation
/// (authentication vs. post creation) is the caller's job.
#[derive(Debug, Clone)]
pub struct XrpcClient {
    client: reqwest::Client,
    pds: PdsUrl,
}

impl XrpcClient {
    /// Create a new XRPC client for the given PDS.
    pub fn new(pds: PdsUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("skypost/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, pds }
    }

    /// Make an unauthenticated XRPC procedure (POST request).
    pub async fn procedure<B, R>(&self, method: &str, body: &B) -> Result<R, RequestError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, %url, "XRPC procedure");

        let response = self.client.post(&url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Make an authenticated XRPC procedure (POST request).
    pub async fn procedure_authed<B, R>(
        &self,
        method: &str,
        body: &B,
        token: &str,
    ) -> Result<R, RequestError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, %url, "XRPC authenticated procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(self.auth_headers(token))
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Decode a success body, or turn a non-2xx response into a status
    /// error with whatever XRPC error body the server sent.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, RequestError> {
        let status = response.status();
        trace!(status = %status, "XRPC response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            let status = status.as_u16();
            let error = match response.json::<XrpcErrorResponse>().await {
                Ok(body) => ProtocolError::new(status, body.error, body.message),
                Err(_) => ProtocolError::new(status, None, None),
            };
            Err(RequestError::Status(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let pds = PdsUrl::new("https://bsky.social").unwrap();
        let client = XrpcClient::new(pds);
        assert_eq!(client.pds.as_str(), "https://bsky.social/");
    }
}
