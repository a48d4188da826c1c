//! OTP verification action

use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::session::Session;
use crate::server::app::AppState;

/// Verify the OTP code and promote the pending record to a durable session.
///
/// The pending record is consumed only once the code itself is accepted;
/// input failures (`InvalidToken`, `VerificationFailed`) leave it in place
/// so the user can retry the OTP step.
pub async fn verify_otp(
    state: &AppState,
    code: &str,
    pending_cookie: Option<String>,
) -> Result<Session, AuthError> {
    // Simulated verification latency.
    tokio::time::sleep(Duration::from_millis(state.config.otp_delay_ms)).await;

    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::InvalidToken);
    }

    if code != state.config.otp_code {
        warn!("OTP verification failed");
        return Err(AuthError::VerificationFailed);
    }

    let token = pending_cookie.ok_or(AuthError::SessionExpired)?;
    let pending = state
        .pending
        .take(&token)
        .await
        .ok_or(AuthError::SessionInvalid)?;

    let session = Session {
        session_id: pending.session_id,
        auth_token: pending.token,
        refresh_token: pending.refresh_token,
        username: pending.username,
        is_logged_in: true,
        created_at: Utc::now(),
    };
    state.sessions.insert(session.clone()).await;

    info!(
        "Session promoted for {}",
        session.username.as_deref().unwrap_or("unknown")
    );
    Ok(session)
}
