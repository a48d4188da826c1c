//! Logout action

use tracing::{error, info};

use crate::server::app::AppState;

/// Best-effort upstream logout followed by unconditional local teardown.
///
/// Never fails: a dead backend is logged and ignored, and the route layer
/// clears every handshake cookie regardless of what happens here.
pub async fn logout(state: &AppState, auth_token: Option<String>, session_id: Option<String>) {
    // Default to a dummy session if not found, just to attempt the call.
    let session_id = session_id.unwrap_or_else(|| "current-session".to_string());

    if let Some(token) = auth_token {
        if let Err(e) = state.wtis.logout(&session_id, Some(&token)).await {
            error!("Logout Error: {}", e);
            // Continue with local logout.
        }
    }

    state.sessions.remove(&session_id).await;
    info!("Session cleared: {}", session_id);
}
