//! Handshake failure taxonomy.
//!
//! Every failing branch of the handshake resolves to a redirect back to the
//! login page carrying `error` and `message` query parameters, which the
//! client's toast listener renders. There is no retry state: a failed
//! attempt restarts its step manually.

use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username and Password are required")]
    ValidationError,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// OTP input that is not a 6-digit code.
    #[error("Please enter a valid 6-digit token")]
    InvalidToken,

    /// Pending marker absent at verification time.
    #[error("Session expired")]
    SessionExpired,

    /// Pending marker present but not resolvable to a record.
    #[error("Session invalid")]
    SessionInvalid,

    #[error("Verification failed")]
    VerificationFailed,
}

impl AuthError {
    /// The `error`/`message` pair carried on the redirect query string.
    pub fn query_pair(&self) -> (&'static str, &'static str) {
        match self {
            AuthError::ValidationError => {
                ("Validation Error", "Username and Password are required")
            }
            AuthError::InvalidCredentials => ("Invalid credentials", "Use admin/123456"),
            AuthError::InvalidToken => ("Invalid Token", "Please enter a valid 6-digit token"),
            AuthError::SessionExpired => ("Session Expired", "Please login again"),
            AuthError::SessionInvalid => ("Session Invalid", "Please login again"),
            AuthError::VerificationFailed => ("Verification Failed", "Invalid OTP (Try 123456)"),
        }
    }

    /// OTP-input failures keep the user on the OTP step; everything else
    /// sends them back to the credential form.
    pub fn stays_on_otp_step(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::VerificationFailed)
    }

    /// Build the login-page redirect for this failure.
    pub fn redirect(&self) -> Redirect {
        let (error, message) = self.query_pair();
        let step = if self.stays_on_otp_step() {
            "step=otp&"
        } else {
            ""
        };
        Redirect::to(&format!(
            "/login?{step}error={}&message={}",
            urlencoding::encode(error),
            urlencoding::encode(message)
        ))
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.redirect().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    fn location(error: AuthError) -> String {
        let response = error.into_response();
        response
            .headers()
            .get(LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn validation_error_redirects_to_credential_form() {
        let target = location(AuthError::ValidationError);
        assert!(target.starts_with("/login?error=Validation%20Error"));
        assert!(!target.contains("step=otp"));
    }

    #[test]
    fn otp_failures_stay_on_otp_step() {
        assert!(location(AuthError::InvalidToken).contains("step=otp"));
        assert!(location(AuthError::VerificationFailed).contains("step=otp"));
        assert!(!location(AuthError::SessionExpired).contains("step=otp"));
    }

    #[test]
    fn messages_are_percent_encoded() {
        let target = location(AuthError::SessionExpired);
        assert_eq!(
            target,
            "/login?error=Session%20Expired&message=Please%20login%20again"
        );
    }
}
