//! Translation between backend rate records and console tariff rows.
//!
//! The backend keys everything by numeric master ids; the console works in
//! display names. The forward direction reads the denormalized name fields
//! off the backend record. The reverse direction resolves names through
//! lookup tables loaded from the master lists, defaulting to id 1 for names
//! the backend does not know yet.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use tracing::warn;
use wtis::models::{BackendRate, CreateRatePayload, MasterQuery, UpdateRatePayload};
use wtis::WtisService;

use super::models::{RateMasterForm, RateStatus, RateUpdate, WaterRate};
use super::CURRENT_USER_ID;

const DEFAULT_MIN_READING: i32 = 0;
const DEFAULT_MAX_READING: i32 = 99999;

/// Map a backend rate record to the console row.
pub fn to_water_rate(backend: &BackendRate) -> WaterRate {
    WaterRate {
        id: backend.rate_id,
        zone_no: backend.zone_code.clone().unwrap_or_default(),
        ward_no: backend.ward_code.clone().unwrap_or_default(),
        category: backend
            .category_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        connection_type: backend
            .connection_type_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        tap_size: backend.tap_size.clone().unwrap_or_default(),
        rate_per_kl: backend.per_liter,
        annual_flat_rate: backend.rate,
        minimum_charge: backend.minimum_charge,
        meter_off_penalty: backend.meter_off_penalty,
        status: if backend.is_active {
            RateStatus::Active
        } else {
            RateStatus::Inactive
        },
    }
}

/// Name → id tables for the reverse mapping.
#[derive(Debug, Clone, Default)]
pub struct LookupMaps {
    zones: HashMap<String, i32>,
    wards: HashMap<String, i32>,
    categories: HashMap<String, i32>,
    connection_types: HashMap<String, i32>,
    tap_sizes: HashMap<String, i32>,
}

impl LookupMaps {
    /// Load the tables from the backend master lists. Each list is fetched
    /// best-effort; a failed fetch leaves that table empty and resolution
    /// falls back to the default id.
    pub async fn load(client: &WtisService) -> Self {
        let query = MasterQuery {
            page_number: Some(1),
            page_size: Some(1000),
            ..Default::default()
        };

        let (zones, wards, categories, connection_types, tap_sizes) = tokio::join!(
            client.get_zones(&query),
            client.get_wards(&query),
            client.get_connection_categories(&query),
            client.get_connection_types(&query),
            client.get_pipe_sizes(&query),
        );

        let mut maps = LookupMaps::default();

        match zones {
            Ok(page) => {
                for zone in page.items {
                    if let Some(code) = zone.zone_code.clone() {
                        maps.zones.insert(code, zone.zone_id);
                    }
                    maps.zones.insert(zone.zone_name, zone.zone_id);
                }
            }
            Err(e) => warn!("Failed to load zone lookup: {}", e),
        }
        match wards {
            Ok(page) => {
                for ward in page.items {
                    if let Some(code) = ward.ward_code.clone() {
                        maps.wards.insert(code, ward.ward_id);
                    }
                    maps.wards.insert(ward.ward_name, ward.ward_id);
                }
            }
            Err(e) => warn!("Failed to load ward lookup: {}", e),
        }
        match categories {
            Ok(page) => {
                for category in page.items {
                    maps.categories
                        .insert(category.category_name, category.category_id);
                }
            }
            Err(e) => warn!("Failed to load category lookup: {}", e),
        }
        match connection_types {
            Ok(page) => {
                for kind in page.items {
                    maps.connection_types
                        .insert(kind.connection_type_name, kind.connection_type_id);
                }
            }
            Err(e) => warn!("Failed to load connection type lookup: {}", e),
        }
        match tap_sizes {
            Ok(page) => {
                for size in page.items {
                    maps.tap_sizes.insert(size.size_name, size.pipe_size_id);
                }
            }
            Err(e) => warn!("Failed to load tap size lookup: {}", e),
        }

        maps
    }

    pub fn knows_zone(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    fn resolve(table: &HashMap<String, i32>, name: &str) -> i32 {
        table.get(name).copied().unwrap_or(1)
    }

    /// Build the backend creation payload from a validated form.
    pub fn to_create_payload(&self, form: &RateMasterForm) -> CreateRatePayload {
        let zone_no = form.zone_no.as_deref().unwrap_or_default();
        let ward_no = form.ward_no.as_deref().unwrap_or_default();
        CreateRatePayload {
            zone_id: Self::resolve(&self.zones, zone_no),
            ward_id: Self::resolve(&self.wards, ward_no),
            tap_size_id: Self::resolve(&self.tap_sizes, &form.tap_size),
            connection_type_id: Self::resolve(&self.connection_types, &form.connection_type),
            connection_category_id: Self::resolve(&self.categories, &form.category),
            min_reading: DEFAULT_MIN_READING,
            max_reading: DEFAULT_MAX_READING,
            per_liter: form.rate_per_kl,
            minimum_charge: form.minimum_charge,
            meter_off_penalty: form.meter_off_penalty,
            rate: form.annual_flat_rate,
            year: Utc::now().year(),
            remark: Some(format!("{} - {}", form.category, form.connection_type)),
            is_active: form.status == RateStatus::Active,
            created_by: CURRENT_USER_ID,
        }
    }
}

/// Merge a partial console update over the current backend record into a
/// full update payload (the backend requires every field on PUT).
pub fn to_update_payload(current: &BackendRate, updates: &RateUpdate) -> UpdateRatePayload {
    UpdateRatePayload {
        zone_id: current.zone_id,
        ward_id: current.ward_id,
        tap_size_id: current.tap_size_id,
        connection_type_id: current.connection_type_id,
        connection_category_id: current.connection_category_id,
        min_reading: current.min_reading,
        max_reading: current.max_reading,
        per_liter: updates.rate_per_kl.unwrap_or(current.per_liter),
        minimum_charge: updates.minimum_charge.unwrap_or(current.minimum_charge),
        meter_off_penalty: updates
            .meter_off_penalty
            .unwrap_or(current.meter_off_penalty),
        rate: updates.annual_flat_rate.unwrap_or(current.rate),
        year: current.year,
        remark: current.remark.clone(),
        is_active: updates
            .status
            .map(|status| status == RateStatus::Active)
            .unwrap_or(current.is_active),
        updated_by: CURRENT_USER_ID,
    }
}
