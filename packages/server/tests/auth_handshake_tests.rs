//! Integration tests for the session handshake.
//!
//! The upstream auth API is unreachable in every test, so these also pin
//! the degraded-path behavior: the bypass pair works without a backend, and
//! logout always completes locally.

mod common;

use common::*;

#[tokio::test]
async fn empty_credentials_redirect_with_validation_error() {
    let app = test_app();

    let response = send(&app, form_post("/auth/login", "username=&password=", None)).await;
    assert_see_other(&response);
    let target = location(&response);
    assert!(target.starts_with("/login?error=Validation%20Error"));
    assert!(cookies_set(&response).is_empty());

    let response = send(&app, form_post("/auth/login", "username=admin", None)).await;
    assert_see_other(&response);
    assert!(location(&response).starts_with("/login?error=Validation%20Error"));
}

#[tokio::test]
async fn bypass_credentials_login_despite_dead_backend() {
    let app = test_app();

    let response = send(
        &app,
        form_post("/auth/login", "username=admin&password=123456", None),
    )
    .await;
    assert_see_other(&response);
    assert_eq!(location(&response), "/dashboard");

    let cookies = cookies_set(&response);
    assert_eq!(cookies.get("is_logged_in").map(String::as_str), Some("true"));
    assert!(cookies.contains_key("session_id"));
    assert!(
        cookies.contains_key("pending_auth"),
        "pending marker must be created at credential submission"
    );

    // The pending cookie carries an opaque token, never the bundle.
    let pending = &cookies["pending_auth"];
    assert!(!pending.contains("admin"));
    assert!(!pending.contains('{'));
}

#[tokio::test]
async fn wrong_credentials_never_set_the_login_marker() {
    let app = test_app();

    let response = send(
        &app,
        form_post("/auth/login", "username=operator&password=hunter2", None),
    )
    .await;
    assert_see_other(&response);
    assert!(location(&response).starts_with("/login?error=Invalid%20credentials"));
    assert!(cookies_set(&response).is_empty());
}

#[tokio::test]
async fn malformed_otp_stays_on_otp_step() {
    let app = test_app();

    for code in ["12345", "1234567", "12a456", ""] {
        let response = send(
            &app,
            form_post("/auth/verify-otp", &format!("otp={code}"), None),
        )
        .await;
        assert_see_other(&response);
        let target = location(&response);
        assert!(target.contains("step=otp"), "{code:?} -> {target}");
        assert!(target.contains("error=Invalid%20Token"));
        assert!(cookies_set(&response).is_empty());
    }
}

#[tokio::test]
async fn wrong_otp_fails_verification() {
    let app = test_app();

    let response = send(&app, form_post("/auth/verify-otp", "otp=654321", None)).await;
    assert_see_other(&response);
    let target = location(&response);
    assert!(target.contains("step=otp"));
    assert!(target.contains("error=Verification%20Failed"));
}

#[tokio::test]
async fn correct_otp_without_pending_marker_is_session_expired() {
    let app = test_app();

    let response = send(&app, form_post("/auth/verify-otp", "otp=123456", None)).await;
    assert_see_other(&response);
    assert!(location(&response).starts_with("/login?error=Session%20Expired"));
    assert!(cookies_set(&response).is_empty());
}

#[tokio::test]
async fn correct_otp_with_unknown_pending_token_is_session_invalid() {
    let app = test_app();

    let response = send(
        &app,
        form_post(
            "/auth/verify-otp",
            "otp=123456",
            Some("pending_auth=not-a-real-token"),
        ),
    )
    .await;
    assert_see_other(&response);
    assert!(location(&response).starts_with("/login?error=Session%20Invalid"));
}

#[tokio::test]
async fn full_handshake_promotes_present_fields_and_clears_pending() {
    let app = test_app();

    let login = send(
        &app,
        form_post("/auth/login", "username=admin&password=123456", None),
    )
    .await;
    let login_cookies = cookies_set(&login);
    let pending = &login_cookies["pending_auth"];

    let verify = send(
        &app,
        form_post(
            "/auth/verify-otp",
            "otp=123456",
            Some(&format!("pending_auth={pending}")),
        ),
    )
    .await;
    assert_see_other(&verify);
    assert_eq!(location(&verify), "/dashboard");

    let promoted = cookies_set(&verify);
    assert!(promoted.contains_key("session_id"));
    assert_eq!(promoted.get("is_logged_in").map(String::as_str), Some("true"));
    assert_eq!(promoted.get("user_name").map(String::as_str), Some("admin"));
    // The backend was unreachable, so there are no tokens to promote.
    assert!(!promoted.contains_key("auth_token"));
    assert!(!promoted.contains_key("refresh_token"));

    assert!(
        cookies_cleared(&verify).contains(&"pending_auth".to_string()),
        "promotion must clear the pending cookie"
    );

    // Session cookies are HttpOnly with the 7-day Max-Age; the display
    // cookies are readable.
    let raw = set_cookie_headers(&verify);
    let session = raw.iter().find(|c| c.starts_with("session_id=")).unwrap();
    assert!(session.contains("HttpOnly"));
    assert!(session.contains("Max-Age=604800"));
    let user_name = raw.iter().find(|c| c.starts_with("user_name=")).unwrap();
    assert!(!user_name.contains("HttpOnly"));
}

#[tokio::test]
async fn pending_marker_is_read_once() {
    let app = test_app();

    let login = send(
        &app,
        form_post("/auth/login", "username=admin&password=123456", None),
    )
    .await;
    let pending = cookies_set(&login)["pending_auth"].clone();
    let cookie = format!("pending_auth={pending}");

    let first = send(&app, form_post("/auth/verify-otp", "otp=123456", Some(&cookie))).await;
    assert_eq!(location(&first), "/dashboard");

    // Replaying the same pending token must not mint a second session.
    let second = send(&app, form_post("/auth/verify-otp", "otp=123456", Some(&cookie))).await;
    assert!(location(&second).starts_with("/login?error=Session%20Invalid"));
}

#[tokio::test]
async fn logout_clears_all_six_cookies_even_when_backend_fails() {
    let app = test_app();

    let response = send(
        &app,
        form_post(
            "/auth/logout",
            "",
            Some("auth_token=jwt; session_id=sess-1; user_name=admin"),
        ),
    )
    .await;
    assert_see_other(&response);
    assert_eq!(location(&response), "/");

    let mut cleared = cookies_cleared(&response);
    cleared.sort();
    assert_eq!(
        cleared,
        vec![
            "auth_token",
            "is_logged_in",
            "pending_auth",
            "refresh_token",
            "session_id",
            "user_name"
        ]
    );
}

#[tokio::test]
async fn logout_without_cookies_still_clears_locally() {
    let app = test_app();

    let response = send(&app, form_post("/auth/logout", "", None)).await;
    assert_see_other(&response);
    assert_eq!(location(&response), "/");
    assert_eq!(cookies_cleared(&response).len(), 6);
}

#[tokio::test]
async fn promoted_session_resolves_through_the_guard() {
    let app = test_app();

    let login = send(
        &app,
        form_post("/auth/login", "username=admin&password=123456", None),
    )
    .await;
    let pending = cookies_set(&login)["pending_auth"].clone();
    let verify = send(
        &app,
        form_post(
            "/auth/verify-otp",
            "otp=123456",
            Some(&format!("pending_auth={pending}")),
        ),
    )
    .await;
    let session_id = cookies_set(&verify)["session_id"].clone();

    let response = send(
        &app,
        get(
            "/api/dashboard/stats",
            Some(&format!("session_id={session_id}")),
        ),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}
