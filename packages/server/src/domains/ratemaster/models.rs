//! Console-facing Rate Master types.
//!
//! These are the rows the console tables render, distinct from the backend
//! wire types in the `wtis` crate. The mapping between the two lives in
//! [`super::mapping`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateStatus {
    Active,
    Inactive,
}

/// One tariff row as the console renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterRate {
    pub id: i32,
    pub zone_no: String,
    pub ward_no: String,
    pub category: String,
    pub connection_type: String,
    pub tap_size: String,
    #[serde(rename = "ratePerKL")]
    pub rate_per_kl: f64,
    pub annual_flat_rate: f64,
    pub minimum_charge: f64,
    pub meter_off_penalty: f64,
    pub status: RateStatus,
}

/// Create/update form for a tariff row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMasterForm {
    #[serde(default)]
    pub zone_no: Option<String>,
    #[serde(default)]
    pub ward_no: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub connection_type: String,
    #[serde(default)]
    pub tap_size: String,
    #[serde(rename = "ratePerKL", default)]
    pub rate_per_kl: f64,
    #[serde(default)]
    pub annual_flat_rate: f64,
    #[serde(default)]
    pub minimum_charge: f64,
    #[serde(default)]
    pub meter_off_penalty: f64,
    pub status: RateStatus,
}

impl RateMasterForm {
    /// Field validation shared by create and update.
    pub fn validate(&self) -> Result<(), String> {
        if self.zone_no.as_deref().unwrap_or("").trim().is_empty()
            || self.ward_no.as_deref().unwrap_or("").trim().is_empty()
        {
            return Err("Zone and Ward are required".to_string());
        }
        if self.category.trim().is_empty() || self.connection_type.trim().is_empty() {
            return Err("Category and Connection Type are required".to_string());
        }
        if self.rate_per_kl < 0.0 || self.minimum_charge < 0.0 {
            return Err("Rates must be positive numbers".to_string());
        }
        Ok(())
    }
}

/// Partial update for a tariff row; absent fields keep the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateUpdate {
    #[serde(rename = "ratePerKL", default)]
    pub rate_per_kl: Option<f64>,
    #[serde(default)]
    pub annual_flat_rate: Option<f64>,
    #[serde(default)]
    pub minimum_charge: Option<f64>,
    #[serde(default)]
    pub meter_off_penalty: Option<f64>,
    #[serde(default)]
    pub status: Option<RateStatus>,
}

/// `{ id, name }` pair the master-data dropdowns consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterItem {
    pub id: i32,
    pub name: String,
}

/// One billing cycle as the console table renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleRow {
    pub id: i32,
    pub zone: String,
    pub connection_type: String,
    pub connection_category: String,
    pub cycle_type: String,
    pub financial_year: i32,
    pub bill_generation_date: String,
    pub bill_period_start: String,
    pub bill_period_end: String,
    pub current_penalty: f64,
    pub pending_penalty: f64,
    pub status: RateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RateMasterForm {
        RateMasterForm {
            zone_no: Some("Z-A".to_string()),
            ward_no: Some("W-1".to_string()),
            category: "Domestic".to_string(),
            connection_type: "Meter".to_string(),
            tap_size: "15mm".to_string(),
            rate_per_kl: 7.5,
            annual_flat_rate: 1200.0,
            minimum_charge: 60.0,
            meter_off_penalty: 25.0,
            status: RateStatus::Active,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn missing_zone_or_ward_is_rejected() {
        let mut bad = form();
        bad.zone_no = None;
        assert_eq!(bad.validate().unwrap_err(), "Zone and Ward are required");

        let mut bad = form();
        bad.ward_no = Some("   ".to_string());
        assert_eq!(bad.validate().unwrap_err(), "Zone and Ward are required");
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut bad = form();
        bad.connection_type = String::new();
        assert_eq!(
            bad.validate().unwrap_err(),
            "Category and Connection Type are required"
        );
    }

    #[test]
    fn negative_charges_are_rejected() {
        let mut bad = form();
        bad.minimum_charge = -1.0;
        assert_eq!(bad.validate().unwrap_err(), "Rates must be positive numbers");
    }

    #[test]
    fn water_rate_serializes_rate_per_kl_casing() {
        let rate = WaterRate {
            id: 1,
            zone_no: "Z-A".to_string(),
            ward_no: "W-1".to_string(),
            category: "Domestic".to_string(),
            connection_type: "Meter".to_string(),
            tap_size: "15mm".to_string(),
            rate_per_kl: 7.5,
            annual_flat_rate: 1200.0,
            minimum_charge: 60.0,
            meter_off_penalty: 25.0,
            status: RateStatus::Active,
        };
        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["ratePerKL"], 7.5);
        assert_eq!(json["zoneNo"], "Z-A");
        assert_eq!(json["status"], "Active");
    }
}
