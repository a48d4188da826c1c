//! Server-side stores for the two handshake entities.
//!
//! The browser only ever holds opaque identifiers; the pending credential
//! bundle and the promoted session live here. Expiry is checked on read -
//! there is no background sweep.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque token handed to the browser in the `pending_auth` cookie.
pub type PendingToken = String;

/// Pending records abandoned mid-handshake expire after this window and
/// force a full re-login.
const PENDING_TTL_MINUTES: i64 = 10;

/// Durable sessions match the 7-day cookie Max-Age.
const SESSION_MAX_AGE_DAYS: i64 = 7;

/// Credential bundle held between the password step and the OTP step.
///
/// Consumed exactly once at verification; loss of this record forces a full
/// re-login.
#[derive(Clone, Debug)]
pub struct PendingAuth {
    pub session_id: String,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// In-memory store for pending handshake records, keyed by opaque token.
pub struct PendingAuthStore {
    entries: Arc<RwLock<HashMap<PendingToken, PendingAuth>>>,
}

impl PendingAuthStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a pending record and return the opaque token for the cookie.
    pub async fn put(&self, pending: PendingAuth) -> PendingToken {
        let token = Uuid::new_v4().to_string();
        let mut entries = self.entries.write().await;
        entries.insert(token.clone(), pending);
        token
    }

    /// Consume a pending record. Read-once: a second take with the same
    /// token returns None, as does a token older than the TTL.
    pub async fn take(&self, token: &str) -> Option<PendingAuth> {
        let mut entries = self.entries.write().await;
        let pending = entries.remove(token)?;

        let elapsed = Utc::now().signed_duration_since(pending.created_at);
        if elapsed > Duration::minutes(PENDING_TTL_MINUTES) {
            return None;
        }

        Some(pending)
    }
}

impl Default for PendingAuthStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Durable session created at OTP verification, destroyed at logout.
#[derive(Clone, Debug)]
pub struct Session {
    pub session_id: String,
    pub auth_token: Option<String>,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
    pub is_logged_in: bool,
    pub created_at: DateTime<Utc>,
}

/// In-memory session store keyed by session id.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.session_id.clone(), session);
    }

    /// Get a session by id. Sessions older than the cookie Max-Age are
    /// treated as gone.
    pub async fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(session_id)?;

        let elapsed = Utc::now().signed_duration_since(session.created_at);
        if elapsed.num_days() >= SESSION_MAX_AGE_DAYS {
            return None;
        }

        Some(session.clone())
    }

    /// Delete a session (logout).
    pub async fn remove(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
