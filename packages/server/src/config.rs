use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Platform API root (auth, ULB master, service catalog).
    pub auth_api_base_url: String,
    /// Water-tax API root (rate master family).
    pub wtis_api_base_url: String,
    pub api_timeout_secs: u64,
    /// Accept self-signed upstream certificates (development backends).
    pub accept_invalid_certs: bool,
    /// Mark session cookies `Secure` (production deployments).
    pub secure_cookies: bool,
    /// Serve mock records without calling the backend at all.
    pub use_mock_data: bool,
    /// Demo bypass credentials; checked independently of the backend outcome.
    pub bypass_username: String,
    pub bypass_password: String,
    /// The only OTP code accepted by the verification step.
    pub otp_code: String,
    /// Simulated verification latency.
    pub otp_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            auth_api_base_url: env::var("AUTH_API_BASE_URL")
                .unwrap_or_else(|_| "https://localhost:5268/api".to_string()),
            wtis_api_base_url: env::var("WTIS_API_BASE_URL")
                .unwrap_or_else(|_| "https://localhost:44346/api/wtis".to_string()),
            api_timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("API_TIMEOUT_SECS must be a valid number")?,
            accept_invalid_certs: env_flag("ACCEPT_INVALID_CERTS"),
            secure_cookies: env_flag("SECURE_COOKIES"),
            use_mock_data: env_flag("USE_MOCK_DATA"),
            bypass_username: env::var("BYPASS_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            bypass_password: env::var("BYPASS_PASSWORD").unwrap_or_else(|_| "123456".to_string()),
            otp_code: env::var("OTP_CODE").unwrap_or_else(|_| "123456".to_string()),
            otp_delay_ms: env::var("OTP_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("OTP_DELAY_MS must be a valid number")?,
        })
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|value| value == "true").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Only exercised when the variables are unset in the test runner.
        if env::var("PORT").is_err() && env::var("BYPASS_USERNAME").is_err() {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.bypass_username, "admin");
            assert_eq!(config.bypass_password, "123456");
            assert_eq!(config.otp_code, "123456");
            assert_eq!(config.otp_delay_ms, 1000);
            assert!(!config.use_mock_data);
        }
    }
}
