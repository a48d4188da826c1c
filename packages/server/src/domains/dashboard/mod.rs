//! Dashboard domain - route/vehicle statistics shown on the landing page.

pub mod store;

pub use store::{DashboardStats, NewRoute, RouteStat, RouteStatus, RouteStore};
