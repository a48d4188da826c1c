//! Auth domain - the two-step session handshake
//!
//! Moves a user from `Anonymous` through `CredentialsSubmitted` (pending
//! record held server side, referenced by an opaque cookie) to
//! `Authenticated`, and back to `Anonymous` at logout.
//!
//! Responsibilities:
//! - Credential submission with upstream login attempt and demo bypass
//! - OTP verification promoting the pending record to a durable session
//! - Best-effort upstream logout and unconditional local teardown

pub mod actions;
pub mod cookies;
pub mod errors;
pub mod session;

pub use errors::AuthError;
pub use session::{PendingAuth, PendingAuthStore, Session, SessionStore};
