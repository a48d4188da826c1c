//! Session cookie names and `Set-Cookie` builders.
//!
//! Six cookies make up the handshake state. `is_logged_in` and `user_name`
//! stay readable from `document.cookie` for client-side display; the rest
//! are HttpOnly. The `pending_auth` cookie carries only an opaque token
//! into the server-side pending store, never the credential bundle.

/// Non-HttpOnly marker the client watches to detect login state.
pub const IS_LOGGED_IN: &str = "is_logged_in";
pub const SESSION_ID: &str = "session_id";
pub const AUTH_TOKEN: &str = "auth_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
/// Non-HttpOnly, displayed in the header.
pub const USER_NAME: &str = "user_name";
/// Opaque pending-auth token, cleared at promotion.
pub const PENDING_AUTH: &str = "pending_auth";

/// Every cookie cleared at logout.
pub const ALL: [&str; 6] = [
    AUTH_TOKEN,
    REFRESH_TOKEN,
    SESSION_ID,
    PENDING_AUTH,
    IS_LOGGED_IN,
    USER_NAME,
];

/// Durable session cookies live for 7 days.
pub const WEEK_SECS: i64 = 60 * 60 * 24 * 7;

/// The login marker set at the credential step lives for a year.
pub const YEAR_SECS: i64 = 60 * 60 * 24 * 365;

/// Build a `Set-Cookie` value.
pub fn set(name: &str, value: &str, max_age_secs: i64, http_only: bool, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax");
    if http_only {
        cookie.push_str("; HttpOnly");
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a session-scoped (no Max-Age) `Set-Cookie` value.
pub fn set_transient(name: &str, value: &str, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; SameSite=Lax; HttpOnly");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` value that removes the cookie.
pub fn clear(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_builds_attributes_in_order() {
        let cookie = set(AUTH_TOKEN, "abc", WEEK_SECS, true, false);
        assert_eq!(
            cookie,
            "auth_token=abc; Path=/; Max-Age=604800; SameSite=Lax; HttpOnly"
        );
    }

    #[test]
    fn secure_flag_is_appended_when_configured() {
        let cookie = set(IS_LOGGED_IN, "true", YEAR_SECS, false, true);
        assert!(cookie.ends_with("; Secure"));
        assert!(!cookie.contains("HttpOnly"));
    }

    #[test]
    fn transient_cookie_has_no_max_age() {
        let cookie = set_transient(PENDING_AUTH, "tok", false);
        assert!(!cookie.contains("Max-Age"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn clear_expires_immediately() {
        assert_eq!(clear(USER_NAME), "user_name=; Path=/; Max-Age=0; SameSite=Lax");
    }

    #[test]
    fn all_covers_the_six_handshake_cookies() {
        assert_eq!(ALL.len(), 6);
        for name in [
            AUTH_TOKEN,
            REFRESH_TOKEN,
            SESSION_ID,
            PENDING_AUTH,
            IS_LOGGED_IN,
            USER_NAME,
        ] {
            assert!(ALL.contains(&name));
        }
    }
}
