//! Credential submission action

use tracing::{error, info};
use uuid::Uuid;
use wtis::models::{LoginRequest, TrackingData};

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::session::PendingAuth;
use crate::server::app::AppState;

/// Client fingerprint derived from request headers.
#[derive(Debug, Clone, Default)]
pub struct ClientMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Successful credential submission: the opaque pending token plus the
/// session id, both promoted into cookies by the route layer.
#[derive(Debug, Clone)]
pub struct CredentialsAccepted {
    pub pending_token: String,
    pub session_id: String,
}

/// Validate credentials, attempt the upstream login, and create the pending
/// handshake record.
///
/// The upstream call is attempted for every submission but its failure never
/// aborts the handshake; the bypass pair is checked independently of the
/// backend outcome. Any credentials other than the bypass pair are rejected.
pub async fn submit_credentials(
    state: &AppState,
    username: &str,
    password: &str,
    meta: ClientMeta,
) -> Result<CredentialsAccepted, AuthError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::ValidationError);
    }

    // The session id is generated here, not issued by the backend.
    let session_id = Uuid::new_v4().to_string();

    let request = LoginRequest {
        user_name: username.to_string(),
        password: password.to_string(),
        remember_me: true,
        tracking_data: tracking_data(&meta, &session_id),
    };

    info!("Attempting login to {}", state.config.auth_api_base_url);
    let response = match state.wtis.login(&request).await {
        Ok(response) => Some(response),
        Err(e) => {
            // A dead backend does not abort the handshake; the bypass check
            // below still runs against a degraded (empty) response.
            error!("Login Error: {}", e);
            None
        }
    };

    if username != state.config.bypass_username || password != state.config.bypass_password {
        return Err(AuthError::InvalidCredentials);
    }

    let response = response.unwrap_or_default();
    let backend_username = response.user.as_ref().map(|user| user.username.clone());
    let pending_token = state
        .pending
        .put(PendingAuth {
            session_id: session_id.clone(),
            token: response.token,
            refresh_token: response.refresh_token,
            username: backend_username.or_else(|| Some(username.to_string())),
            created_at: chrono::Utc::now(),
        })
        .await;

    info!("Credentials accepted for {}", username);
    Ok(CredentialsAccepted {
        pending_token,
        session_id,
    })
}

fn tracking_data(meta: &ClientMeta, session_id: &str) -> TrackingData {
    let user_agent = meta.user_agent.as_deref().unwrap_or("Unknown");
    TrackingData {
        ip_address: Some(
            meta.ip_address
                .clone()
                .unwrap_or_else(|| "127.0.0.1".to_string()),
        ),
        user_agent: Some(user_agent.to_string()),
        browser_name: Some(browser_name(user_agent).to_string()),
        // Simplified version tracking
        browser_version: Some("Latest".to_string()),
        operating_system: Some(operating_system(user_agent).to_string()),
        device_type: Some(device_type(user_agent).to_string()),
        session_id: Some(session_id.to_string()),
    }
}

fn browser_name(user_agent: &str) -> &'static str {
    if user_agent.contains("Edg/") {
        "Edge"
    } else if user_agent.contains("Chrome/") {
        "Chrome"
    } else if user_agent.contains("Firefox/") {
        "Firefox"
    } else if user_agent.contains("Safari/") {
        "Safari"
    } else {
        "Other"
    }
}

fn operating_system(user_agent: &str) -> &'static str {
    if user_agent.contains("Windows") {
        "Windows"
    } else if user_agent.contains("Mac") {
        "MacOS"
    } else if user_agent.contains("Linux") {
        "Linux"
    } else if user_agent.contains("Android") {
        "Android"
    } else if user_agent.contains("iOS")
        || user_agent.contains("iPhone")
        || user_agent.contains("iPad")
    {
        "iOS"
    } else {
        "Other"
    }
}

fn device_type(user_agent: &str) -> &'static str {
    const MOBILE_MARKERS: [&str; 4] = ["Mobile", "Android", "iPhone", "iPad"];
    if MOBILE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
    {
        "Mobile"
    } else {
        "Desktop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_user_agents() {
        let chrome = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                      (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        assert_eq!(browser_name(chrome), "Chrome");
        assert_eq!(operating_system(chrome), "Windows");
        assert_eq!(device_type(chrome), "Desktop");

        let edge = "Mozilla/5.0 ... Chrome/120.0.0.0 Safari/537.36 Edg/120.0";
        assert_eq!(browser_name(edge), "Edge");

        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                      AppleWebKit/605.1.15 Version/17.0 Mobile/15E148 Safari/604.1";
        assert_eq!(browser_name(iphone), "Safari");
        assert_eq!(operating_system(iphone), "iOS");
        assert_eq!(device_type(iphone), "Mobile");
    }

    #[test]
    fn unknown_agent_falls_back() {
        assert_eq!(browser_name("curl/8.0"), "Other");
        assert_eq!(operating_system("curl/8.0"), "Other");
        assert_eq!(device_type("curl/8.0"), "Desktop");
    }

    #[test]
    fn tracking_data_defaults_missing_meta() {
        let data = tracking_data(&ClientMeta::default(), "sess-1");
        assert_eq!(data.ip_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(data.user_agent.as_deref(), Some("Unknown"));
        assert_eq!(data.session_id.as_deref(), Some("sess-1"));
    }
}
