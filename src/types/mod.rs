//! Validated protocol primitives.

mod pds_url;

pub use pds_url::PdsUrl;
