//! Session handshake endpoints.
//!
//! The handshake speaks browser form posts and redirects, not JSON: every
//! outcome is a 303 with `Set-Cookie` headers and a `Location` the console
//! follows, errors carrying `error`/`message` query parameters.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::domains::auth::actions::{logout, submit_credentials, verify_otp, ClientMeta};
use crate::domains::auth::cookies;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct OtpForm {
    #[serde(default)]
    pub otp: String,
}

/// `POST /auth/login`
pub async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let meta = client_meta(&headers);
    match submit_credentials(&state, &form.username, &form.password, meta).await {
        Ok(accepted) => {
            let secure = state.config.secure_cookies;
            redirect_with_cookies(
                "/dashboard",
                vec![
                    cookies::set_transient(cookies::PENDING_AUTH, &accepted.pending_token, secure),
                    // Long-lived marker for the client-side session watcher.
                    cookies::set(
                        cookies::IS_LOGGED_IN,
                        "true",
                        cookies::YEAR_SECS,
                        false,
                        secure,
                    ),
                    // Placeholder session cookie until OTP promotion.
                    cookies::set(
                        cookies::SESSION_ID,
                        &accepted.session_id,
                        cookies::WEEK_SECS,
                        false,
                        secure,
                    ),
                ],
            )
        }
        Err(error) => error.into_response(),
    }
}

/// `POST /auth/verify-otp`
pub async fn verify_otp_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<OtpForm>,
) -> Response {
    let pending = jar
        .get(cookies::PENDING_AUTH)
        .map(|cookie| cookie.value().to_string());

    match verify_otp(&state, &form.otp, pending).await {
        Ok(session) => {
            let secure = state.config.secure_cookies;
            // Promote each present field into its own durable cookie.
            let mut set = vec![cookies::set(
                cookies::SESSION_ID,
                &session.session_id,
                cookies::WEEK_SECS,
                true,
                secure,
            )];
            if let Some(token) = &session.auth_token {
                set.push(cookies::set(
                    cookies::AUTH_TOKEN,
                    token,
                    cookies::WEEK_SECS,
                    true,
                    secure,
                ));
            }
            if let Some(refresh) = &session.refresh_token {
                set.push(cookies::set(
                    cookies::REFRESH_TOKEN,
                    refresh,
                    cookies::WEEK_SECS,
                    true,
                    secure,
                ));
            }
            set.push(cookies::set(
                cookies::IS_LOGGED_IN,
                "true",
                cookies::WEEK_SECS,
                false,
                secure,
            ));
            if let Some(username) = &session.username {
                set.push(cookies::set(
                    cookies::USER_NAME,
                    username,
                    cookies::WEEK_SECS,
                    false,
                    secure,
                ));
            }
            set.push(cookies::clear(cookies::PENDING_AUTH));
            redirect_with_cookies("/dashboard", set)
        }
        Err(error) => error.into_response(),
    }
}

/// `POST /auth/logout`
pub async fn logout_submit(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar
        .get(cookies::AUTH_TOKEN)
        .map(|cookie| cookie.value().to_string());
    let session_id = jar
        .get(cookies::SESSION_ID)
        .map(|cookie| cookie.value().to_string());

    logout(&state, token, session_id).await;

    let cleared = cookies::ALL
        .iter()
        .map(|name| cookies::clear(name))
        .collect();
    redirect_with_cookies("/", cleared)
}

fn client_meta(headers: &HeaderMap) -> ClientMeta {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string());
    ClientMeta {
        ip_address,
        user_agent,
    }
}

/// 303 redirect carrying one `Set-Cookie` header per cookie.
fn redirect_with_cookies(location: &str, cookies: Vec<String>) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location);
    for cookie in cookies {
        builder = builder.header(header::SET_COOKIE, cookie);
    }
    builder
        .body(Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
