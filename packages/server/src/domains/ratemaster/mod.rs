//! Rate Master domain - water tariffs and their master data.
//!
//! Tariff rows are proxied to the WTIS backend through the mapping layer in
//! [`mapping`]; when the backend is unreachable, reads (and rate mutations)
//! fall back to the static records in [`mock`].

pub mod mapping;
pub mod mock;
pub mod models;

pub use mapping::{to_water_rate, LookupMaps};
pub use mock::MockMasterStore;
pub use models::*;

/// Attribution id used for createdBy/updatedBy until the backend accepts
/// per-operator ids from the console session.
pub const CURRENT_USER_ID: i32 = 1;
