//! ULB branding and service catalog lookups.
//!
//! Both render on the public login/dashboard pages, so these sit outside
//! the session guard.

use axum::extract::State;
use axum::Json;
use tracing::warn;
use wtis::models::{ServiceEntry, UlbMaster};

use crate::common::ApiResponse;
use crate::server::app::AppState;

/// `GET /api/ulbs`
pub async fn list_ulbs(State(state): State<AppState>) -> Json<ApiResponse<Vec<UlbMaster>>> {
    match state.wtis.get_ulbs().await {
        Ok(ulbs) => Json(ApiResponse::ok(ulbs)),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `GET /api/ulbs/active`
pub async fn list_active_ulbs(State(state): State<AppState>) -> Json<ApiResponse<Vec<UlbMaster>>> {
    match state.wtis.get_active_ulbs().await {
        Ok(ulbs) => Json(ApiResponse::ok(ulbs)),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `GET /api/services`
///
/// The dashboard's service cards tolerate a dead backend: failures come
/// back as an empty list, not an error.
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<ServiceEntry>> {
    match state.wtis.get_services().await {
        Ok(services) => Json(services),
        Err(e) => {
            warn!("Failed to fetch service catalog: {}", e);
            Json(Vec::new())
        }
    }
}
