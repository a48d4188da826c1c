//! Handshake actions, one per operation.

pub mod logout;
pub mod submit_credentials;
pub mod verify_otp;

pub use logout::logout;
pub use submit_credentials::{submit_credentials, ClientMeta, CredentialsAccepted};
pub use verify_otp::verify_otp;
