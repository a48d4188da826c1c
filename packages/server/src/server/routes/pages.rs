//! Public landing endpoints.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /` - service banner on the home path.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Water Tax Administration Console",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub step: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Login page state: which step to render plus the toast pair carried by
/// handshake redirects.
#[derive(Debug, Serialize)]
pub struct LoginPageState {
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /login`
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Json<LoginPageState> {
    Json(LoginPageState {
        step: query.step.unwrap_or_else(|| "credentials".to_string()),
        error: query.error,
        message: query.message,
    })
}
