//! Route guard enforcing the console's cookie-gated access.
//!
//! Public paths (home, login page, health, the handshake endpoints, and the
//! ULB/service lookups the login page renders) pass through. Every other
//! path requires the `session_id` cookie and redirects to the login page
//! without it. Presence of the cookie is what gates access; when it also
//! resolves to a live server-side session, a [`SessionUser`] is attached to
//! the request so handlers can read who is acting.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::domains::auth::cookies;
use crate::server::app::AppState;

/// Authenticated user information resolved from the session store.
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub session_id: String,
    pub username: Option<String>,
}

pub async fn session_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let session_id = jar
        .get(cookies::SESSION_ID)
        .map(|cookie| cookie.value().to_string());

    if is_public(&path) {
        // Logged-in users skip the login form, except during the OTP step.
        if path == "/login" && session_id.is_some() && !is_otp_step(request.uri().query()) {
            return Redirect::to("/dashboard").into_response();
        }
        return next.run(request).await;
    }

    let Some(session_id) = session_id else {
        return Redirect::to("/login").into_response();
    };

    if let Some(session) = state.sessions.get(&session_id).await {
        request.extensions_mut().insert(SessionUser {
            session_id,
            username: session.username.clone(),
        });
    }

    next.run(request).await
}

fn is_public(path: &str) -> bool {
    path == "/"
        || path == "/login"
        || path == "/health"
        || path.starts_with("/auth/")
        || path == "/api/ulbs"
        || path == "/api/ulbs/active"
        || path == "/api/services"
}

fn is_otp_step(query: Option<&str>) -> bool {
    query
        .map(|q| q.split('&').any(|pair| pair == "step=otp"))
        .unwrap_or(false)
}
