//! Typed client for the WTIS municipal backend.
//!
//! The backend exposes two API roots: the platform root (`/api`) serving
//! auth, ULB master and the service catalog, and the water-tax root
//! (`/api/wtis`) serving the rate-master family of endpoints. Both are
//! configured through [`WtisOptions`].

pub mod models;

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::*;

#[derive(Debug, Error)]
pub enum WtisError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl WtisError {
    /// HTTP status of the backend rejection, when this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WtisError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WtisOptions {
    /// Platform API root, e.g. `https://localhost:5268/api`.
    pub auth_base_url: String,
    /// Water-tax API root, e.g. `https://localhost:44346/api/wtis`.
    pub api_base_url: String,
    pub timeout: Duration,
    /// Accept self-signed certificates (development backends only).
    pub accept_invalid_certs: bool,
}

impl Default for WtisOptions {
    fn default() -> Self {
        Self {
            auth_base_url: "https://localhost:5268/api".to_string(),
            api_base_url: "https://localhost:44346/api/wtis".to_string(),
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WtisService {
    options: WtisOptions,
    client: Client,
}

impl WtisService {
    pub fn new(options: WtisOptions) -> Result<Self, WtisError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(WtisError::Client)?;
        Ok(Self { options, client })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}{}", self.options.auth_base_url, path)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.options.api_base_url, path)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, WtisError> {
        let builder = self.client.post(self.auth_url("/Auth/login")).json(request);
        self.send(builder).await
    }

    /// Best-effort server-side logout. The bearer token is attached when the
    /// caller still holds one.
    pub async fn logout(&self, session_id: &str, bearer: Option<&str>) -> Result<(), WtisError> {
        let mut builder = self
            .client
            .post(self.auth_url("/Auth/logout"))
            .json(&LogoutRequest {
                session_id: session_id.to_string(),
            });
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send_empty(builder).await
    }

    // ========================================================================
    // Rate master
    // ========================================================================

    pub async fn get_rates(&self, query: &RateQuery) -> Result<Paginated<BackendRate>, WtisError> {
        self.get(self.api_url("/rate-master"), query).await
    }

    pub async fn get_rate(&self, id: i32) -> Result<BackendRate, WtisError> {
        let builder = self.client.get(self.api_url(&format!("/rate-master/{id}")));
        self.send(builder).await
    }

    pub async fn create_rate(&self, payload: &CreateRatePayload) -> Result<BackendRate, WtisError> {
        let builder = self.client.post(self.api_url("/rate-master")).json(payload);
        self.send(builder).await
    }

    pub async fn update_rate(
        &self,
        id: i32,
        payload: &UpdateRatePayload,
    ) -> Result<BackendRate, WtisError> {
        let builder = self
            .client
            .put(self.api_url(&format!("/rate-master/{id}")))
            .json(payload);
        self.send(builder).await
    }

    pub async fn delete_rate(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/rate-master/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // Zones
    // ========================================================================

    pub async fn get_zones(&self, query: &MasterQuery) -> Result<Paginated<Zone>, WtisError> {
        self.get(self.api_url("/zone-master"), query).await
    }

    pub async fn create_zone(
        &self,
        payload: &CreateZonePayload,
    ) -> Result<ApiEnvelope<Zone>, WtisError> {
        let builder = self.client.post(self.api_url("/zone-master")).json(payload);
        self.send(builder).await
    }

    pub async fn delete_zone(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/zone-master/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // Wards
    // ========================================================================

    pub async fn get_wards(&self, query: &MasterQuery) -> Result<Paginated<Ward>, WtisError> {
        self.get(self.api_url("/ward-master"), query).await
    }

    pub async fn create_ward(
        &self,
        payload: &CreateWardPayload,
    ) -> Result<ApiEnvelope<Ward>, WtisError> {
        let builder = self.client.post(self.api_url("/ward-master")).json(payload);
        self.send(builder).await
    }

    pub async fn delete_ward(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/ward-master/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // Connection types and categories
    // ========================================================================

    pub async fn get_connection_types(
        &self,
        query: &MasterQuery,
    ) -> Result<Paginated<ConnectionType>, WtisError> {
        self.get(self.api_url("/connection-type"), query).await
    }

    pub async fn create_connection_type(
        &self,
        payload: &CreateConnectionTypePayload,
    ) -> Result<ConnectionType, WtisError> {
        let builder = self
            .client
            .post(self.api_url("/connection-type"))
            .json(payload);
        self.send(builder).await
    }

    pub async fn delete_connection_type(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/connection-type/{id}")));
        self.send_empty(builder).await
    }

    pub async fn get_connection_categories(
        &self,
        query: &MasterQuery,
    ) -> Result<Paginated<ConnectionCategory>, WtisError> {
        self.get(self.api_url("/connection-category"), query).await
    }

    pub async fn create_connection_category(
        &self,
        payload: &CreateConnectionCategoryPayload,
    ) -> Result<ConnectionCategory, WtisError> {
        let builder = self
            .client
            .post(self.api_url("/connection-category"))
            .json(payload);
        self.send(builder).await
    }

    pub async fn delete_connection_category(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/connection-category/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // Tap sizes (backend `pipe-size`)
    // ========================================================================

    pub async fn get_pipe_sizes(
        &self,
        query: &MasterQuery,
    ) -> Result<Paginated<PipeSize>, WtisError> {
        self.get(self.api_url("/pipe-size"), query).await
    }

    pub async fn get_pipe_size(&self, id: i32) -> Result<PipeSize, WtisError> {
        let builder = self.client.get(self.api_url(&format!("/pipe-size/{id}")));
        self.send(builder).await
    }

    pub async fn create_pipe_size(
        &self,
        payload: &CreatePipeSizePayload,
    ) -> Result<PipeSize, WtisError> {
        let builder = self.client.post(self.api_url("/pipe-size")).json(payload);
        self.send(builder).await
    }

    pub async fn update_pipe_size(
        &self,
        id: i32,
        payload: &UpdatePipeSizePayload,
    ) -> Result<PipeSize, WtisError> {
        let builder = self
            .client
            .put(self.api_url(&format!("/pipe-size/{id}")))
            .json(payload);
        self.send(builder).await
    }

    pub async fn delete_pipe_size(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/pipe-size/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // Billing cycles
    // ========================================================================

    pub async fn get_billing_cycles(
        &self,
        query: &BillingCycleQuery,
    ) -> Result<Paginated<BillingCycle>, WtisError> {
        self.get(self.api_url("/billing-cycle-master"), query).await
    }

    pub async fn create_billing_cycle(
        &self,
        payload: &BillingCyclePayload,
    ) -> Result<BillingCycle, WtisError> {
        let builder = self
            .client
            .post(self.api_url("/billing-cycle-master"))
            .json(payload);
        self.send(builder).await
    }

    pub async fn update_billing_cycle(
        &self,
        id: i32,
        payload: &BillingCyclePayload,
    ) -> Result<BillingCycle, WtisError> {
        let builder = self
            .client
            .put(self.api_url(&format!("/billing-cycle-master/{id}")))
            .json(payload);
        self.send(builder).await
    }

    pub async fn delete_billing_cycle(&self, id: i32) -> Result<(), WtisError> {
        let builder = self
            .client
            .delete(self.api_url(&format!("/billing-cycle-master/{id}")));
        self.send_empty(builder).await
    }

    // ========================================================================
    // ULB master and service catalog
    // ========================================================================

    pub async fn get_ulbs(&self) -> Result<Vec<UlbMaster>, WtisError> {
        let builder = self.client.get(self.auth_url("/ULBMaster"));
        self.send(builder).await
    }

    pub async fn get_active_ulbs(&self) -> Result<Vec<UlbMaster>, WtisError> {
        let builder = self.client.get(self.auth_url("/ULBMaster/active"));
        self.send(builder).await
    }

    pub async fn get_services(&self) -> Result<Vec<ServiceEntry>, WtisError> {
        let builder = self.client.get(self.auth_url("/Services"));
        self.send(builder).await
    }

    // ========================================================================
    // Transport
    // ========================================================================

    async fn get<Q: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        query: &Q,
    ) -> Result<T, WtisError> {
        let builder = self.client.get(url).query(query);
        self.send(builder).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, WtisError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), WtisError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(())
    }
}

/// Build a [`WtisError::Status`], preferring the backend's own message.
///
/// The backend reports failures as `{ message }`, `{ Message }` or
/// problem-details `{ title }` depending on the endpoint.
fn status_error(status: StatusCode, body: &str) -> WtisError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "Message", "title"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|m| m.as_str().map(String::from)))
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
    tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
    WtisError::Status {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_backend_message() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{ "message": "Zone already exists" }"#,
        );
        assert_eq!(err.to_string(), "Zone already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn status_error_reads_pascal_case_and_problem_title() {
        let err = status_error(StatusCode::CONFLICT, r#"{ "Message": "Duplicate ward" }"#);
        assert_eq!(err.to_string(), "Duplicate ward");

        let err = status_error(StatusCode::NOT_FOUND, r#"{ "title": "Not Found" }"#);
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn status_error_falls_back_to_http_status() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn url_roots_are_separate() {
        let service = WtisService::new(WtisOptions {
            auth_base_url: "https://auth.example/api".into(),
            api_base_url: "https://wtis.example/api/wtis".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            service.auth_url("/Auth/login"),
            "https://auth.example/api/Auth/login"
        );
        assert_eq!(
            service.api_url("/rate-master"),
            "https://wtis.example/api/wtis/rate-master"
        );
    }
}
