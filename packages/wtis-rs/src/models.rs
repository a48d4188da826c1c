//! Wire types for the WTIS backend API.
//!
//! Field names follow the backend's JSON conventions: camelCase with
//! `ID`-suffixed identifiers (`zoneID`, `rateID`, ...). A few endpoints
//! historically returned PascalCase variants; those carry serde aliases.

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth
// ============================================================================

/// Client fingerprint sent alongside login requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
    pub remember_me: bool,
    pub tracking_data: TrackingData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub session_id: String,
}

// ============================================================================
// Pagination envelope
// ============================================================================

/// Paged list as returned by every master-data list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub page_number: i32,
    #[serde(default)]
    pub page_size: i32,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub total_pages: i32,
    #[serde(default)]
    pub has_previous: bool,
    #[serde(default)]
    pub has_next: bool,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Paginated {
            items: Vec::new(),
            page_number: 1,
            page_size: 0,
            total_count: 0,
            total_pages: 0,
            has_previous: false,
            has_next: false,
        }
    }
}

/// Mutation envelope used by some master endpoints (`{ success, message, items }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Option<T>,
}

// ============================================================================
// Rate master
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRate {
    #[serde(rename = "rateID", alias = "id")]
    pub rate_id: i32,
    #[serde(rename = "zoneID", default)]
    pub zone_id: i32,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub zone_code: Option<String>,
    #[serde(rename = "wardID", default)]
    pub ward_id: i32,
    #[serde(default)]
    pub ward_name: Option<String>,
    #[serde(default)]
    pub ward_code: Option<String>,
    #[serde(rename = "tapSizeID", default)]
    pub tap_size_id: i32,
    #[serde(default)]
    pub tap_size: Option<String>,
    #[serde(rename = "connectionTypeID", default)]
    pub connection_type_id: i32,
    #[serde(default)]
    pub connection_type_name: Option<String>,
    #[serde(rename = "connectionCategoryID", default)]
    pub connection_category_id: i32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub min_reading: i32,
    #[serde(default)]
    pub max_reading: i32,
    #[serde(default)]
    pub per_liter: f64,
    #[serde(default)]
    pub minimum_charge: f64,
    #[serde(default)]
    pub meter_off_penalty: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatePayload {
    #[serde(rename = "zoneID")]
    pub zone_id: i32,
    #[serde(rename = "wardID")]
    pub ward_id: i32,
    #[serde(rename = "tapSizeID")]
    pub tap_size_id: i32,
    #[serde(rename = "connectionTypeID")]
    pub connection_type_id: i32,
    #[serde(rename = "connectionCategoryID")]
    pub connection_category_id: i32,
    pub min_reading: i32,
    pub max_reading: i32,
    pub per_liter: f64,
    pub minimum_charge: f64,
    pub meter_off_penalty: f64,
    pub rate: f64,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatePayload {
    #[serde(rename = "zoneID")]
    pub zone_id: i32,
    #[serde(rename = "wardID")]
    pub ward_id: i32,
    #[serde(rename = "tapSizeID")]
    pub tap_size_id: i32,
    #[serde(rename = "connectionTypeID")]
    pub connection_type_id: i32,
    #[serde(rename = "connectionCategoryID")]
    pub connection_category_id: i32,
    pub min_reading: i32,
    pub max_reading: i32,
    pub per_liter: f64,
    pub minimum_charge: f64,
    pub meter_off_penalty: f64,
    pub rate: f64,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub is_active: bool,
    pub updated_by: i32,
}

/// Filters accepted by `GET /rate-master`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(rename = "zoneID", skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<i32>,
    #[serde(rename = "wardID", skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<i32>,
    #[serde(rename = "tapSizeID", skip_serializing_if = "Option::is_none")]
    pub tap_size_id: Option<i32>,
    #[serde(rename = "connectionTypeID", skip_serializing_if = "Option::is_none")]
    pub connection_type_id: Option<i32>,
    #[serde(rename = "connectionCategoryID", skip_serializing_if = "Option::is_none")]
    pub connection_category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters shared by the simple master-data list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ============================================================================
// Zones and wards
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(rename = "zoneID")]
    pub zone_id: i32,
    pub zone_name: String,
    #[serde(default)]
    pub zone_code: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZonePayload {
    pub zone_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    #[serde(rename = "wardID")]
    pub ward_id: i32,
    pub ward_name: String,
    #[serde(default)]
    pub ward_code: Option<String>,
    #[serde(rename = "zoneID", default)]
    pub zone_id: i32,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWardPayload {
    pub ward_name: String,
    pub ward_code: String,
    #[serde(rename = "zoneID")]
    pub zone_id: i32,
    pub is_active: bool,
    pub created_by: i32,
}

// ============================================================================
// Connection types, categories, tap sizes
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionType {
    #[serde(rename = "connectionTypeID")]
    pub connection_type_id: i32,
    pub connection_type_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionTypePayload {
    pub connection_type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCategory {
    #[serde(rename = "categoryID", alias = "CategoryID")]
    pub category_id: i32,
    #[serde(alias = "CategoryName")]
    pub category_name: String,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionCategoryPayload {
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
}

/// Tap sizes are served by the backend's `pipe-size` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipeSize {
    #[serde(rename = "pipeSizeID")]
    pub pipe_size_id: i32,
    pub size_name: String,
    #[serde(rename = "diameterMM", default)]
    pub diameter_mm: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipeSizePayload {
    pub size_name: String,
    #[serde(rename = "diameterMM")]
    pub diameter_mm: f64,
    pub is_active: bool,
    pub created_by: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePipeSizePayload {
    pub size_name: String,
    #[serde(rename = "diameterMM")]
    pub diameter_mm: f64,
    pub updated_by: i32,
}

// ============================================================================
// Billing cycles
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycle {
    #[serde(rename = "billingCycleMasterID", alias = "id")]
    pub billing_cycle_master_id: i32,
    #[serde(rename = "zoneID", default)]
    pub zone_id: i32,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(rename = "connectionTypeID", default)]
    pub connection_type_id: i32,
    #[serde(rename = "connectionCategoryID", default)]
    pub connection_category_id: i32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub cycle_type: Option<String>,
    #[serde(default)]
    pub financial_year: i32,
    #[serde(default)]
    pub bill_generation_date: Option<String>,
    #[serde(default)]
    pub bill_period_start_date: Option<String>,
    #[serde(default)]
    pub bill_period_end_date: Option<String>,
    #[serde(default)]
    pub current_penalty_start_date: Option<String>,
    #[serde(default)]
    pub current_penalty_end_date: Option<String>,
    #[serde(default)]
    pub pending_penalty_start_date: Option<String>,
    #[serde(default)]
    pub pending_penalty_end_date: Option<String>,
    #[serde(default)]
    pub current_penalty_percent: f64,
    #[serde(default)]
    pub pending_penalty_percent: f64,
    #[serde(default)]
    pub is_reading_approved: bool,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub number_of_cycles: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub created_by: i32,
    #[serde(default)]
    pub updated_by: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCyclePayload {
    #[serde(rename = "zoneID")]
    pub zone_id: i32,
    #[serde(rename = "connectionTypeID")]
    pub connection_type_id: i32,
    #[serde(rename = "connectionCategoryID")]
    pub connection_category_id: i32,
    pub cycle_type: String,
    pub financial_year: i32,
    pub bill_generation_date: String,
    pub bill_period_start_date: String,
    pub bill_period_end_date: String,
    pub current_penalty_percent: f64,
    pub pending_penalty_percent: f64,
    pub number_of_cycles: i32,
    pub is_active: bool,
    pub created_by: i32,
}

/// Filters accepted by `GET /billing-cycle-master`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(rename = "zoneID", skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<i32>,
    #[serde(rename = "connectionTypeID", skip_serializing_if = "Option::is_none")]
    pub connection_type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ============================================================================
// ULB master and service catalog
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UlbMaster {
    pub id: i32,
    pub ulb_code: String,
    pub ulb_name: String,
    #[serde(default)]
    pub ulb_name_local: Option<String>,
    #[serde(default)]
    pub ulb_type_id: i32,
    #[serde(default)]
    pub ulb_logo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub ulb_address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStat {
    pub label: String,
    pub value: String,
}

/// Entry in the municipal service catalog shown on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub id: i32,
    pub link: String,
    pub icon: String,
    pub title: String,
    pub subtext: String,
    #[serde(default)]
    pub stats: Option<Vec<ServiceStat>>,
}
