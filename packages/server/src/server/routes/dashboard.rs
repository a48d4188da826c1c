//! Dashboard route-statistics endpoints.

use axum::extract::{Path, State};
use axum::Json;

use crate::common::ApiResponse;
use crate::domains::dashboard::{DashboardStats, NewRoute, RouteStat};
use crate::server::app::AppState;

/// `GET /api/dashboard/routes`
pub async fn list_routes(State(state): State<AppState>) -> Json<ApiResponse<Vec<RouteStat>>> {
    Json(ApiResponse::ok(state.routes.list().await))
}

/// `POST /api/dashboard/routes`
pub async fn create_route(
    State(state): State<AppState>,
    Json(new): Json<NewRoute>,
) -> Json<ApiResponse<RouteStat>> {
    Json(ApiResponse::ok(state.routes.create(new).await))
}

/// `DELETE /api/dashboard/routes/:id`
pub async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<()>> {
    if state.routes.delete(&id).await {
        Json(ApiResponse::ok(()))
    } else {
        Json(ApiResponse::err("Route not found"))
    }
}

/// `GET /api/dashboard/stats`
pub async fn dashboard_stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    Json(ApiResponse::ok(state.routes.stats().await))
}
