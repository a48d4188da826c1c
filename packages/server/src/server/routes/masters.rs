//! Master-data endpoints: zones, wards, connection categories, connection
//! types and tap sizes.
//!
//! Lists degrade to mock records when the backend is unreachable; mutations
//! surface the backend's error so the operator sees why the change was
//! rejected.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::warn;
use wtis::models::{
    CreateConnectionCategoryPayload, CreateConnectionTypePayload, CreatePipeSizePayload,
    CreateWardPayload, CreateZonePayload, PipeSize, UpdatePipeSizePayload,
};

use crate::common::{ApiResponse, PageParams, DEFAULT_PAGE_SIZE};
use crate::domains::ratemaster::models::MasterItem;
use crate::domains::ratemaster::CURRENT_USER_ID;
use crate::server::app::AppState;

/// Message returned for mutations while mock-data mode is forced on.
const MOCK_MODE_ERROR: &str = "Backend API not available. Using mock data mode.";

// ============================================================================
// Zones
// ============================================================================

/// `GET /api/zones`
pub async fn list_zones(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<ApiResponse<Vec<MasterItem>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.zones()));
    }

    let query = params.validate(DEFAULT_PAGE_SIZE).into();
    match state.wtis.get_zones(&query).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items
                .into_iter()
                .map(|zone| MasterItem {
                    id: zone.zone_id,
                    name: zone.zone_name,
                })
                .collect(),
        )),
        Err(e) => {
            warn!("API call failed for zones, falling back to mock data: {}", e);
            Json(ApiResponse::ok(state.mock.zones()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewZone {
    #[serde(default)]
    pub name: String,
}

/// `POST /api/zones`
pub async fn create_zone(
    State(state): State<AppState>,
    Json(body): Json<NewZone>,
) -> Json<ApiResponse<String>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Zone name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = CreateZonePayload {
        zone_name: name.to_string(),
        zone_code: None,
        description: Some(format!("{name} zone")),
        is_active: true,
        created_by: CURRENT_USER_ID,
    };
    match state.wtis.create_zone(&payload).await {
        Ok(envelope) => {
            let created = envelope
                .items
                .map(|zone| zone.zone_name)
                .unwrap_or_else(|| name.to_string());
            Json(ApiResponse::ok_with_message(
                created,
                "Zone added successfully",
            ))
        }
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/zones/:id`
pub async fn delete_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.delete_zone(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message(
            (),
            "Zone deleted successfully",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

// ============================================================================
// Wards
// ============================================================================

/// `GET /api/wards`
pub async fn list_wards(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<ApiResponse<Vec<MasterItem>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.wards()));
    }

    let query = params.validate(DEFAULT_PAGE_SIZE).into();
    match state.wtis.get_wards(&query).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items
                .into_iter()
                .map(|ward| MasterItem {
                    id: ward.ward_id,
                    name: ward.ward_name,
                })
                .collect(),
        )),
        Err(e) => {
            warn!("API call failed for wards, falling back to mock data: {}", e);
            Json(ApiResponse::ok(state.mock.wards()))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "zoneID", default)]
    pub zone_id: i32,
}

/// `POST /api/wards`
pub async fn create_ward(
    State(state): State<AppState>,
    Json(body): Json<NewWard>,
) -> Json<ApiResponse<String>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Ward name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = CreateWardPayload {
        ward_name: name.to_string(),
        ward_code: body.code.unwrap_or_else(|| name.to_string()),
        zone_id: body.zone_id.max(1),
        is_active: true,
        created_by: CURRENT_USER_ID,
    };
    match state.wtis.create_ward(&payload).await {
        Ok(envelope) => {
            let created = envelope
                .items
                .map(|ward| ward.ward_name)
                .unwrap_or_else(|| name.to_string());
            Json(ApiResponse::ok_with_message(
                created,
                "Ward added successfully",
            ))
        }
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/wards/:id`
pub async fn delete_ward(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.delete_ward(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message(
            (),
            "Ward deleted successfully",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

// ============================================================================
// Connection categories
// ============================================================================

/// `GET /api/connection-categories`
pub async fn list_connection_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<ApiResponse<Vec<MasterItem>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.categories()));
    }

    let query = params.validate(DEFAULT_PAGE_SIZE).into();
    match state.wtis.get_connection_categories(&query).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items
                .into_iter()
                .map(|category| MasterItem {
                    id: category.category_id,
                    name: category.category_name,
                })
                .collect(),
        )),
        Err(e) => {
            warn!(
                "API call failed for categories, falling back to mock data: {}",
                e
            );
            Json(ApiResponse::ok(state.mock.categories()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `POST /api/connection-categories`
pub async fn create_connection_category(
    State(state): State<AppState>,
    Json(body): Json<NewCategory>,
) -> Json<ApiResponse<MasterItem>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Category name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = CreateConnectionCategoryPayload {
        category_name: name.to_string(),
        description: body.description,
        is_active: true,
        created_by: CURRENT_USER_ID,
    };
    match state.wtis.create_connection_category(&payload).await {
        Ok(category) => Json(ApiResponse::ok_with_message(
            MasterItem {
                id: category.category_id,
                name: category.category_name,
            },
            "Category added!",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/connection-categories/:id`
pub async fn delete_connection_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.delete_connection_category(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message((), "Category deleted!")),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

// ============================================================================
// Connection types
// ============================================================================

/// `GET /api/connection-types`
pub async fn list_connection_types(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<ApiResponse<Vec<MasterItem>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.connection_types()));
    }

    let query = params.validate(DEFAULT_PAGE_SIZE).into();
    match state.wtis.get_connection_types(&query).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items
                .into_iter()
                .map(|kind| MasterItem {
                    id: kind.connection_type_id,
                    name: kind.connection_type_name,
                })
                .collect(),
        )),
        Err(e) => {
            warn!(
                "API call failed for connection types, falling back to mock data: {}",
                e
            );
            Json(ApiResponse::ok(state.mock.connection_types()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewConnectionType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `POST /api/connection-types`
pub async fn create_connection_type(
    State(state): State<AppState>,
    Json(body): Json<NewConnectionType>,
) -> Json<ApiResponse<MasterItem>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Connection type name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = CreateConnectionTypePayload {
        connection_type_name: name.to_string(),
        description: body.description,
        is_active: true,
        created_by: CURRENT_USER_ID,
    };
    match state.wtis.create_connection_type(&payload).await {
        Ok(kind) => Json(ApiResponse::ok_with_message(
            MasterItem {
                id: kind.connection_type_id,
                name: kind.connection_type_name,
            },
            "Connection type added!",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/connection-types/:id`
pub async fn delete_connection_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.delete_connection_type(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message((), "Connection type deleted!")),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

// ============================================================================
// Tap sizes (backend `pipe-size`)
// ============================================================================

/// `GET /api/tap-sizes`
pub async fn list_tap_sizes(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<ApiResponse<Vec<MasterItem>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.tap_sizes()));
    }

    let query = params.validate(DEFAULT_PAGE_SIZE).into();
    match state.wtis.get_pipe_sizes(&query).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items
                .into_iter()
                .map(|size| MasterItem {
                    id: size.pipe_size_id,
                    name: size.size_name,
                })
                .collect(),
        )),
        Err(e) => {
            warn!(
                "API call failed for tap sizes, falling back to mock data: {}",
                e
            );
            Json(ApiResponse::ok(state.mock.tap_sizes()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewTapSize {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "diameterMM", default)]
    pub diameter_mm: f64,
}

/// `POST /api/tap-sizes`
pub async fn create_tap_size(
    State(state): State<AppState>,
    Json(body): Json<NewTapSize>,
) -> Json<ApiResponse<MasterItem>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Tap size name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = CreatePipeSizePayload {
        size_name: name.to_string(),
        diameter_mm: body.diameter_mm,
        is_active: true,
        created_by: CURRENT_USER_ID,
    };
    match state.wtis.create_pipe_size(&payload).await {
        Ok(size) => Json(ApiResponse::ok_with_message(
            MasterItem {
                id: size.pipe_size_id,
                name: size.size_name,
            },
            "Tap size added!",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `GET /api/tap-sizes/:id`
pub async fn get_tap_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<PipeSize>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.get_pipe_size(id).await {
        Ok(size) => Json(ApiResponse::ok(size)),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct TapSizeUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "diameterMM", default)]
    pub diameter_mm: f64,
}

/// `PUT /api/tap-sizes/:id`
pub async fn update_tap_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<TapSizeUpdate>,
) -> Json<ApiResponse<MasterItem>> {
    let name = body.name.trim();
    if name.is_empty() {
        return Json(ApiResponse::err("Tap size name is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    let payload = UpdatePipeSizePayload {
        size_name: name.to_string(),
        diameter_mm: body.diameter_mm,
        updated_by: CURRENT_USER_ID,
    };
    match state.wtis.update_pipe_size(id, &payload).await {
        Ok(size) => Json(ApiResponse::ok_with_message(
            MasterItem {
                id: size.pipe_size_id,
                name: size.size_name,
            },
            "Tap size updated!",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/tap-sizes/:id`
pub async fn delete_tap_size(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }
    match state.wtis.delete_pipe_size(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message((), "Tap size deleted!")),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}
