// HTTP routes
pub mod auth;
pub mod billing_cycles;
pub mod dashboard;
pub mod health;
pub mod masters;
pub mod pages;
pub mod rate_master;
pub mod ulbs;

pub use auth::*;
pub use billing_cycles::*;
pub use dashboard::*;
pub use health::*;
pub use masters::*;
pub use pages::*;
pub use rate_master::*;
pub use ulbs::*;
