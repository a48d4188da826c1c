//! Water tariff endpoints proxied to the backend rate master.
//!
//! Reads and mutations both degrade to the mock store when the backend is
//! unreachable; only validation failures surface directly.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::warn;
use wtis::models::{CreateZonePayload, RateQuery};

use crate::common::{ApiResponse, MAX_PAGE_SIZE, RATE_PAGE_SIZE};
use crate::domains::ratemaster::mapping::{to_update_payload, to_water_rate, LookupMaps};
use crate::domains::ratemaster::models::{RateMasterForm, RateUpdate, WaterRate};
use crate::domains::ratemaster::CURRENT_USER_ID;
use crate::server::app::AppState;

/// Query parameters for the tariff table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateListParams {
    page_number: Option<i32>,
    page_size: Option<i32>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    #[serde(rename = "zoneID")]
    zone_id: Option<i32>,
    #[serde(rename = "wardID")]
    ward_id: Option<i32>,
    #[serde(rename = "tapSizeID")]
    tap_size_id: Option<i32>,
    #[serde(rename = "connectionTypeID")]
    connection_type_id: Option<i32>,
    #[serde(rename = "connectionCategoryID")]
    connection_category_id: Option<i32>,
    year: Option<i32>,
    is_active: Option<bool>,
}

impl RateListParams {
    fn to_query(&self) -> RateQuery {
        RateQuery {
            page_number: Some(self.page_number.unwrap_or(1).max(1)),
            // The console renders the whole table and filters client side.
            page_size: Some(
                self.page_size
                    .unwrap_or(RATE_PAGE_SIZE)
                    .clamp(1, MAX_PAGE_SIZE),
            ),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
            zone_id: self.zone_id,
            ward_id: self.ward_id,
            tap_size_id: self.tap_size_id,
            connection_type_id: self.connection_type_id,
            connection_category_id: self.connection_category_id,
            year: self.year,
            is_active: self.is_active,
        }
    }
}

/// `GET /api/rate-master`
pub async fn list_rates(
    State(state): State<AppState>,
    Query(params): Query<RateListParams>,
) -> Json<ApiResponse<Vec<WaterRate>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.list_rates().await));
    }

    match state.wtis.get_rates(&params.to_query()).await {
        Ok(page) => Json(ApiResponse::ok(
            page.items.iter().map(to_water_rate).collect(),
        )),
        Err(e) => {
            warn!("API call failed, falling back to mock data: {}", e);
            Json(ApiResponse::ok(state.mock.list_rates().await))
        }
    }
}

/// `GET /api/rate-master/:id`
pub async fn get_rate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<WaterRate>> {
    if state.config.use_mock_data {
        return match state.mock.get_rate(id).await {
            Some(rate) => Json(ApiResponse::ok(rate)),
            None => Json(ApiResponse::err("Failed to fetch rate")),
        };
    }

    match state.wtis.get_rate(id).await {
        Ok(backend) => Json(ApiResponse::ok(to_water_rate(&backend))),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `POST /api/rate-master`
pub async fn create_rate(
    State(state): State<AppState>,
    Json(form): Json<RateMasterForm>,
) -> Json<ApiResponse<WaterRate>> {
    if let Err(message) = form.validate() {
        return Json(ApiResponse::err(message));
    }

    if state.config.use_mock_data {
        let rate = state.mock.create_rate(&form).await;
        return Json(ApiResponse::ok_with_message(
            rate,
            "Rate created successfully (Mock Data)",
        ));
    }

    match create_rate_upstream(&state, &form).await {
        Ok(rate) => Json(ApiResponse::ok_with_message(
            rate,
            "Rate created successfully",
        )),
        Err(e) => {
            warn!("API call failed, falling back to mock data: {}", e);
            let rate = state.mock.create_rate(&form).await;
            Json(ApiResponse::ok_with_message(
                rate,
                "Rate created successfully (Mock Data)",
            ))
        }
    }
}

async fn create_rate_upstream(
    state: &AppState,
    form: &RateMasterForm,
) -> Result<WaterRate, wtis::WtisError> {
    let lookups = LookupMaps::load(&state.wtis).await;

    // The backend keys rates by zone id; create the zone first when the
    // submitted name does not resolve.
    let zone_no = form.zone_no.as_deref().unwrap_or_default().trim();
    if !lookups.knows_zone(zone_no) {
        state
            .wtis
            .create_zone(&CreateZonePayload {
                zone_name: zone_no.to_string(),
                zone_code: None,
                description: Some(format!("{zone_no} zone")),
                is_active: true,
                created_by: CURRENT_USER_ID,
            })
            .await?;
    }

    let payload = lookups.to_create_payload(form);
    let created = state.wtis.create_rate(&payload).await?;
    Ok(to_water_rate(&created))
}

/// `PUT /api/rate-master/:id`
pub async fn update_rate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(updates): Json<RateUpdate>,
) -> Json<ApiResponse<WaterRate>> {
    if state.config.use_mock_data {
        return match state.mock.update_rate(id, &updates).await {
            Some(rate) => Json(ApiResponse::ok_with_message(
                rate,
                "Rate updated successfully (Mock Data)",
            )),
            None => Json(ApiResponse::err("Failed to update rate")),
        };
    }

    match update_rate_upstream(&state, id, &updates).await {
        Ok(rate) => Json(ApiResponse::ok_with_message(
            rate,
            "Rate updated successfully",
        )),
        Err(e) => {
            warn!("API call failed, falling back to mock data: {}", e);
            match state.mock.update_rate(id, &updates).await {
                Some(rate) => Json(ApiResponse::ok_with_message(
                    rate,
                    "Rate updated successfully (Mock Data)",
                )),
                None => Json(ApiResponse::err("Failed to update rate")),
            }
        }
    }
}

async fn update_rate_upstream(
    state: &AppState,
    id: i32,
    updates: &RateUpdate,
) -> Result<WaterRate, wtis::WtisError> {
    // The backend requires the full record on PUT: read, merge, write.
    let current = state.wtis.get_rate(id).await?;
    let payload = to_update_payload(&current, updates);
    let updated = state.wtis.update_rate(id, &payload).await?;
    Ok(to_water_rate(&updated))
}

/// `DELETE /api/rate-master/:id`
pub async fn delete_rate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    Json(delete_rate_inner(&state, id).await)
}

async fn delete_rate_inner(state: &AppState, id: i32) -> ApiResponse<()> {
    if state.config.use_mock_data {
        return if state.mock.delete_rate(id).await {
            ApiResponse::ok_with_message((), "Rate deleted successfully (Mock Data)")
        } else {
            ApiResponse::err("Failed to delete rate")
        };
    }

    match state.wtis.delete_rate(id).await {
        Ok(()) => ApiResponse::ok_with_message((), "Rate deleted successfully"),
        Err(e) => {
            warn!("API call failed, falling back to mock data: {}", e);
            if state.mock.delete_rate(id).await {
                ApiResponse::ok_with_message((), "Rate deleted successfully (Mock Data)")
            } else {
                ApiResponse::err("Failed to delete rate")
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkDelete {
    pub ids: Vec<i32>,
}

/// `POST /api/rate-master/bulk-delete`
pub async fn bulk_delete_rates(
    State(state): State<AppState>,
    Json(body): Json<BulkDelete>,
) -> Json<ApiResponse<()>> {
    let mut failed = 0usize;
    for id in &body.ids {
        if !delete_rate_inner(&state, *id).await.success {
            failed += 1;
        }
    }

    if failed > 0 {
        Json(ApiResponse::err("Failed to delete selected rates"))
    } else {
        Json(ApiResponse::ok_with_message(
            (),
            "Rates deleted successfully",
        ))
    }
}
