//! Credentials and session value types.

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::{AccessToken, RefreshToken, Session};
