#![allow(dead_code)] // each test binary uses a subset of these helpers

//! Shared test harness driving the router directly.
//!
//! No external processes: the upstream base URLs point at an unroutable
//! local port so every backend call fails fast, exercising the degraded
//! paths, and the OTP delay is zeroed.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use server_core::{server::build_app, Config};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        port: 0,
        // Nothing listens here; connections are refused immediately.
        auth_api_base_url: "http://127.0.0.1:9/api".to_string(),
        wtis_api_base_url: "http://127.0.0.1:9/api/wtis".to_string(),
        api_timeout_secs: 1,
        accept_invalid_certs: false,
        secure_cookies: false,
        use_mock_data: false,
        bypass_username: "admin".to_string(),
        bypass_password: "123456".to_string(),
        otp_code: "123456".to_string(),
        otp_delay_ms: 0,
    }
}

pub fn test_app() -> Router {
    build_app(test_config()).expect("application should build")
}

pub fn test_app_with(config: Config) -> Router {
    build_app(config).expect("application should build")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("request succeeds")
}

fn base_request(method: &str, uri: &str, cookies: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        // The rate limiter's PeerIpKeyExtractor reads the peer address from the
        // `ConnectInfo` extension that `into_make_service_with_connect_info`
        // supplies in production; `oneshot` does not, so inject it here.
        .extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 0))))
        // The rate limiter keys on the forwarded client IP.
        .header("x-forwarded-for", "127.0.0.1");
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder
}

pub fn get(uri: &str, cookies: Option<&str>) -> Request<Body> {
    base_request("GET", uri, cookies)
        .body(Body::empty())
        .expect("request builds")
}

pub fn form_post(uri: &str, body: &str, cookies: Option<&str>) -> Request<Body> {
    base_request("POST", uri, cookies)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub fn json_request(
    method: &str,
    uri: &str,
    body: serde_json::Value,
    cookies: Option<&str>,
) -> Request<Body> {
    base_request(method, uri, cookies)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub fn delete(uri: &str, cookies: Option<&str>) -> Request<Body> {
    base_request("DELETE", uri, cookies)
        .body(Body::empty())
        .expect("request builds")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has Location")
        .to_str()
        .expect("Location is ASCII")
        .to_string()
}

/// All raw `Set-Cookie` header values on a response.
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(String::from)
        .collect()
}

/// Cookies a response sets, name → value, skipping deletions (Max-Age=0).
pub fn cookies_set(response: &Response) -> HashMap<String, String> {
    set_cookie_headers(response)
        .into_iter()
        .filter(|raw| !raw.contains("Max-Age=0"))
        .filter_map(|raw| {
            let first = raw.split(';').next()?.to_string();
            let (name, value) = first.split_once('=')?;
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

/// Cookie names a response deletes via Max-Age=0.
pub fn cookies_cleared(response: &Response) -> Vec<String> {
    set_cookie_headers(response)
        .into_iter()
        .filter(|raw| raw.contains("Max-Age=0"))
        .filter_map(|raw| {
            raw.split(';')
                .next()
                .and_then(|pair| pair.split_once('='))
                .map(|(name, _)| name.to_string())
        })
        .collect()
}

pub fn assert_see_other(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
