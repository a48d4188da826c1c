//! In-memory repository for dashboard route statistics.
//!
//! The route list is an injected store owned by the application state, not
//! module-level data; each server process seeds the demo routes once at
//! startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStatus {
    Active,
    Delayed,
    Completed,
}

/// One collection route with its vehicle count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStat {
    pub id: String,
    pub route: String,
    pub status: RouteStatus,
    pub vehicles: i32,
    pub last_update: DateTime<Utc>,
}

/// Creation payload; id and timestamp are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub route: String,
    pub status: RouteStatus,
    pub vehicles: i32,
}

/// Aggregates for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_routes: usize,
    pub active: usize,
    pub delayed: usize,
    pub completed: usize,
    pub total_vehicles: i32,
}

pub struct RouteStore {
    routes: Arc<RwLock<Vec<RouteStat>>>,
}

impl RouteStore {
    pub fn empty() -> Self {
        Self {
            routes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store preloaded with the demo routes.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            ("North Route A", RouteStatus::Active, 12),
            ("South Route B", RouteStatus::Delayed, 8),
            ("East Route C", RouteStatus::Active, 15),
            ("West Route D", RouteStatus::Completed, 10),
        ];
        let routes = seed
            .into_iter()
            .map(|(route, status, vehicles)| RouteStat {
                id: Uuid::new_v4().to_string(),
                route: route.to_string(),
                status,
                vehicles,
                last_update: now,
            })
            .collect();
        Self {
            routes: Arc::new(RwLock::new(routes)),
        }
    }

    pub async fn list(&self) -> Vec<RouteStat> {
        self.routes.read().await.clone()
    }

    pub async fn create(&self, new: NewRoute) -> RouteStat {
        let stat = RouteStat {
            id: Uuid::new_v4().to_string(),
            route: new.route,
            status: new.status,
            vehicles: new.vehicles,
            last_update: Utc::now(),
        };
        let mut routes = self.routes.write().await;
        routes.push(stat.clone());
        stat
    }

    /// Delete by id; false when the id is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut routes = self.routes.write().await;
        let before = routes.len();
        routes.retain(|route| route.id != id);
        routes.len() < before
    }

    pub async fn stats(&self) -> DashboardStats {
        let routes = self.routes.read().await;
        DashboardStats {
            total_routes: routes.len(),
            active: routes
                .iter()
                .filter(|r| r.status == RouteStatus::Active)
                .count(),
            delayed: routes
                .iter()
                .filter(|r| r.status == RouteStatus::Delayed)
                .count(),
            completed: routes
                .iter()
                .filter(|r| r.status == RouteStatus::Completed)
                .count(),
            total_vehicles: routes.iter().map(|r| r.vehicles).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_demo_routes() {
        let store = RouteStore::seeded();
        let routes = store.list().await;
        assert_eq!(routes.len(), 4);
        assert!(routes.iter().any(|r| r.route == "North Route A"));

        let stats = store.stats().await;
        assert_eq!(stats.active, 2);
        assert_eq!(stats.delayed, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total_vehicles, 45);
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let store = RouteStore::empty();
        let stat = store
            .create(NewRoute {
                route: "Central Route E".to_string(),
                status: RouteStatus::Active,
                vehicles: 5,
            })
            .await;
        assert!(!stat.id.is_empty());
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_unknown_ids() {
        let store = RouteStore::empty();
        let stat = store
            .create(NewRoute {
                route: "Central Route E".to_string(),
                status: RouteStatus::Active,
                vehicles: 5,
            })
            .await;

        assert!(store.delete(&stat.id).await);
        assert!(!store.delete(&stat.id).await);
        assert!(store.list().await.is_empty());
    }

    #[test]
    fn route_status_serializes_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&RouteStatus::Delayed).unwrap(),
            "\"Delayed\""
        );
    }
}
