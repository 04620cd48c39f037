//! XRPC endpoint names and request/response types.

use serde::{Deserialize, Serialize};

/// com.atproto.server.createSession
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";

/// com.atproto.repo.createRecord
pub const CREATE_RECORD: &str = "com.atproto.repo.createRecord";

/// Request body for createSession. No Debug impl: the body carries the
/// password.
#[derive(Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Response from createSession.
///
/// `access_jwt` and `refresh_jwt` are required: a 200 response missing
/// either fails to decode, which surfaces as an authentication error
/// rather than producing a malformed session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub did: String,
    pub access_jwt: String,
    pub refresh_jwt: String,
}

/// Request body for createRecord. `R` is the record type; the repo field
/// carries the account identifier and the server resolves it to the DID.
#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a, R: Serialize> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub record: &'a R,
}

/// XRPC error response body, sent with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct XrpcErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
