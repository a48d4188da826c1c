//! Static fallback records served when the backend is unreachable.
//!
//! List reads and rate mutations degrade to this store; master-data
//! mutations do not (their failures surface to the caller). Rate mutations
//! applied here live only for the process lifetime.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{
    BillingCycleRow, MasterItem, RateMasterForm, RateStatus, RateUpdate, WaterRate,
};

pub struct MockMasterStore {
    rates: Arc<RwLock<Vec<WaterRate>>>,
    zones: Vec<MasterItem>,
    wards: Vec<MasterItem>,
    categories: Vec<MasterItem>,
    connection_types: Vec<MasterItem>,
    tap_sizes: Vec<MasterItem>,
    billing_cycles: Vec<BillingCycleRow>,
}

fn items(names: &[&str]) -> Vec<MasterItem> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| MasterItem {
            id: idx as i32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

impl MockMasterStore {
    pub fn seeded() -> Self {
        let rates = vec![
            WaterRate {
                id: 1,
                zone_no: "Zone A".to_string(),
                ward_no: "Ward 1".to_string(),
                category: "Domestic".to_string(),
                connection_type: "Meter".to_string(),
                tap_size: "15mm".to_string(),
                rate_per_kl: 7.5,
                annual_flat_rate: 1200.0,
                minimum_charge: 60.0,
                meter_off_penalty: 25.0,
                status: RateStatus::Active,
            },
            WaterRate {
                id: 2,
                zone_no: "Zone A".to_string(),
                ward_no: "Ward 2".to_string(),
                category: "Domestic".to_string(),
                connection_type: "No Meter".to_string(),
                tap_size: "15mm".to_string(),
                rate_per_kl: 0.0,
                annual_flat_rate: 1800.0,
                minimum_charge: 150.0,
                meter_off_penalty: 0.0,
                status: RateStatus::Active,
            },
            WaterRate {
                id: 3,
                zone_no: "Zone B".to_string(),
                ward_no: "Ward 4".to_string(),
                category: "Commercial".to_string(),
                connection_type: "Meter".to_string(),
                tap_size: "20mm".to_string(),
                rate_per_kl: 12.5,
                annual_flat_rate: 3600.0,
                minimum_charge: 300.0,
                meter_off_penalty: 100.0,
                status: RateStatus::Active,
            },
            WaterRate {
                id: 4,
                zone_no: "Zone C".to_string(),
                ward_no: "Ward 6".to_string(),
                category: "Industrial".to_string(),
                connection_type: "Meter".to_string(),
                tap_size: "40mm".to_string(),
                rate_per_kl: 25.0,
                annual_flat_rate: 12000.0,
                minimum_charge: 1000.0,
                meter_off_penalty: 500.0,
                status: RateStatus::Active,
            },
            WaterRate {
                id: 5,
                zone_no: "Zone B".to_string(),
                ward_no: "Ward 5".to_string(),
                category: "Institutional".to_string(),
                connection_type: "Meter".to_string(),
                tap_size: "25mm".to_string(),
                rate_per_kl: 10.0,
                annual_flat_rate: 4800.0,
                minimum_charge: 400.0,
                meter_off_penalty: 150.0,
                status: RateStatus::Inactive,
            },
        ];

        let billing_cycles = vec![
            BillingCycleRow {
                id: 1,
                zone: "Zone A".to_string(),
                connection_type: "Meter".to_string(),
                connection_category: "Domestic".to_string(),
                cycle_type: "Quarterly".to_string(),
                financial_year: 2026,
                bill_generation_date: "2026-04-01".to_string(),
                bill_period_start: "2026-01-01".to_string(),
                bill_period_end: "2026-03-31".to_string(),
                current_penalty: 2.0,
                pending_penalty: 5.0,
                status: RateStatus::Active,
            },
            BillingCycleRow {
                id: 2,
                zone: "Zone B".to_string(),
                connection_type: "No Meter".to_string(),
                connection_category: "Commercial".to_string(),
                cycle_type: "Annual".to_string(),
                financial_year: 2026,
                bill_generation_date: "2026-04-15".to_string(),
                bill_period_start: "2025-04-01".to_string(),
                bill_period_end: "2026-03-31".to_string(),
                current_penalty: 2.5,
                pending_penalty: 6.0,
                status: RateStatus::Active,
            },
        ];

        Self {
            rates: Arc::new(RwLock::new(rates)),
            zones: items(&["Zone A", "Zone B", "Zone C", "Zone D"]),
            wards: items(&[
                "Ward 1", "Ward 2", "Ward 3", "Ward 4", "Ward 5", "Ward 6", "Ward 7", "Ward 8",
            ]),
            categories: items(&["Domestic", "Commercial", "Industrial", "Institutional"]),
            connection_types: items(&["Meter", "No Meter"]),
            tap_sizes: items(&["15mm", "20mm", "25mm", "40mm"]),
            billing_cycles,
        }
    }

    pub async fn list_rates(&self) -> Vec<WaterRate> {
        self.rates.read().await.clone()
    }

    pub async fn get_rate(&self, id: i32) -> Option<WaterRate> {
        self.rates
            .read()
            .await
            .iter()
            .find(|rate| rate.id == id)
            .cloned()
    }

    pub async fn create_rate(&self, form: &RateMasterForm) -> WaterRate {
        let mut rates = self.rates.write().await;
        let id = rates.iter().map(|rate| rate.id).max().unwrap_or(0) + 1;
        let rate = WaterRate {
            id,
            zone_no: form.zone_no.clone().unwrap_or_default(),
            ward_no: form.ward_no.clone().unwrap_or_default(),
            category: form.category.clone(),
            connection_type: form.connection_type.clone(),
            tap_size: form.tap_size.clone(),
            rate_per_kl: form.rate_per_kl,
            annual_flat_rate: form.annual_flat_rate,
            minimum_charge: form.minimum_charge,
            meter_off_penalty: form.meter_off_penalty,
            status: form.status,
        };
        rates.push(rate.clone());
        rate
    }

    pub async fn update_rate(&self, id: i32, updates: &RateUpdate) -> Option<WaterRate> {
        let mut rates = self.rates.write().await;
        let rate = rates.iter_mut().find(|rate| rate.id == id)?;
        if let Some(rate_per_kl) = updates.rate_per_kl {
            rate.rate_per_kl = rate_per_kl;
        }
        if let Some(annual_flat_rate) = updates.annual_flat_rate {
            rate.annual_flat_rate = annual_flat_rate;
        }
        if let Some(minimum_charge) = updates.minimum_charge {
            rate.minimum_charge = minimum_charge;
        }
        if let Some(meter_off_penalty) = updates.meter_off_penalty {
            rate.meter_off_penalty = meter_off_penalty;
        }
        if let Some(status) = updates.status {
            rate.status = status;
        }
        Some(rate.clone())
    }

    pub async fn delete_rate(&self, id: i32) -> bool {
        let mut rates = self.rates.write().await;
        let before = rates.len();
        rates.retain(|rate| rate.id != id);
        rates.len() < before
    }

    pub fn zones(&self) -> Vec<MasterItem> {
        self.zones.clone()
    }

    pub fn wards(&self) -> Vec<MasterItem> {
        self.wards.clone()
    }

    pub fn categories(&self) -> Vec<MasterItem> {
        self.categories.clone()
    }

    pub fn connection_types(&self) -> Vec<MasterItem> {
        self.connection_types.clone()
    }

    pub fn tap_sizes(&self) -> Vec<MasterItem> {
        self.tap_sizes.clone()
    }

    pub fn billing_cycles(&self) -> Vec<BillingCycleRow> {
        self.billing_cycles.clone()
    }
}
