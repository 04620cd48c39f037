//! XRPC HTTP plumbing.

mod client;
mod endpoints;

pub(crate) use client::XrpcClient;
pub(crate) use endpoints::{
    CREATE_RECORD, CREATE_SESSION, CreateRecordRequest, CreateSessionRequest,
    CreateSessionResponse,
};
