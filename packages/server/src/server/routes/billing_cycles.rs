//! Billing cycle endpoints proxied to the backend billing-cycle master.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::warn;
use wtis::models::{BillingCycle, BillingCyclePayload, BillingCycleQuery};

use crate::common::{ApiResponse, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domains::ratemaster::models::{BillingCycleRow, RateStatus};
use crate::server::app::AppState;

const MOCK_MODE_ERROR: &str = "Backend API not available. Using mock data mode.";

/// Query parameters for the billing cycle table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleListParams {
    page_number: Option<i32>,
    page_size: Option<i32>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    #[serde(rename = "zoneID")]
    zone_id: Option<i32>,
    #[serde(rename = "connectionTypeID")]
    connection_type_id: Option<i32>,
    financial_year: Option<i32>,
    is_active: Option<bool>,
}

impl BillingCycleListParams {
    fn to_query(&self) -> BillingCycleQuery {
        BillingCycleQuery {
            page_number: Some(self.page_number.unwrap_or(1).max(1)),
            page_size: Some(
                self.page_size
                    .unwrap_or(DEFAULT_PAGE_SIZE)
                    .clamp(1, MAX_PAGE_SIZE),
            ),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
            zone_id: self.zone_id,
            connection_type_id: self.connection_type_id,
            financial_year: self.financial_year,
            is_active: self.is_active,
        }
    }
}

/// Map the backend record to the console row, defaulting absent display
/// fields to "N/A" the way the table renders them.
fn to_row(cycle: BillingCycle) -> BillingCycleRow {
    BillingCycleRow {
        id: cycle.billing_cycle_master_id,
        zone: cycle.zone_name.unwrap_or_else(|| "N/A".to_string()),
        connection_type: if cycle.connection_type_id > 0 {
            format!("Type {}", cycle.connection_type_id)
        } else {
            "N/A".to_string()
        },
        connection_category: cycle.category_name.unwrap_or_else(|| "N/A".to_string()),
        cycle_type: cycle.cycle_type.unwrap_or_else(|| "N/A".to_string()),
        financial_year: cycle.financial_year,
        bill_generation_date: cycle
            .bill_generation_date
            .unwrap_or_else(|| "N/A".to_string()),
        bill_period_start: cycle
            .bill_period_start_date
            .unwrap_or_else(|| "N/A".to_string()),
        bill_period_end: cycle
            .bill_period_end_date
            .unwrap_or_else(|| "N/A".to_string()),
        current_penalty: cycle.current_penalty_percent,
        pending_penalty: cycle.pending_penalty_percent,
        status: if cycle.is_active {
            RateStatus::Active
        } else {
            RateStatus::Inactive
        },
    }
}

/// `GET /api/billing-cycles`
pub async fn list_billing_cycles(
    State(state): State<AppState>,
    Query(params): Query<BillingCycleListParams>,
) -> Json<ApiResponse<Vec<BillingCycleRow>>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::ok(state.mock.billing_cycles()));
    }

    match state.wtis.get_billing_cycles(&params.to_query()).await {
        Ok(page) => Json(ApiResponse::ok(page.items.into_iter().map(to_row).collect())),
        Err(e) => {
            warn!(
                "API call failed for billing cycles, falling back to mock data: {}",
                e
            );
            Json(ApiResponse::ok(state.mock.billing_cycles()))
        }
    }
}

/// `POST /api/billing-cycles`
pub async fn create_billing_cycle(
    State(state): State<AppState>,
    Json(payload): Json<BillingCyclePayload>,
) -> Json<ApiResponse<BillingCycleRow>> {
    if payload.cycle_type.trim().is_empty() {
        return Json(ApiResponse::err("Cycle type is required"));
    }
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    match state.wtis.create_billing_cycle(&payload).await {
        Ok(cycle) => Json(ApiResponse::ok_with_message(
            to_row(cycle),
            "Billing cycle created successfully",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `PUT /api/billing-cycles/:id`
pub async fn update_billing_cycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BillingCyclePayload>,
) -> Json<ApiResponse<BillingCycleRow>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    match state.wtis.update_billing_cycle(id, &payload).await {
        Ok(cycle) => Json(ApiResponse::ok_with_message(
            to_row(cycle),
            "Billing cycle updated successfully",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// `DELETE /api/billing-cycles/:id`
pub async fn delete_billing_cycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<ApiResponse<()>> {
    if state.config.use_mock_data {
        return Json(ApiResponse::err(MOCK_MODE_ERROR));
    }

    match state.wtis.delete_billing_cycle(id).await {
        Ok(()) => Json(ApiResponse::ok_with_message(
            (),
            "Billing cycle deleted successfully",
        )),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}
