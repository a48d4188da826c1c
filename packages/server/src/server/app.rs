//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wtis::{WtisOptions, WtisService};

use crate::config::Config;
use crate::domains::auth::{PendingAuthStore, SessionStore};
use crate::domains::dashboard::RouteStore;
use crate::domains::ratemaster::MockMasterStore;
use crate::server::middleware::session_guard;
use crate::server::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wtis: Arc<WtisService>,
    pub sessions: Arc<SessionStore>,
    pub pending: Arc<PendingAuthStore>,
    pub routes: Arc<RouteStore>,
    pub mock: Arc<MockMasterStore>,
}

/// Build the Axum application router
pub fn build_app(config: Config) -> Result<Router> {
    let wtis = WtisService::new(WtisOptions {
        auth_base_url: config.auth_api_base_url.clone(),
        api_base_url: config.wtis_api_base_url.clone(),
        timeout: Duration::from_secs(config.api_timeout_secs),
        accept_invalid_certs: config.accept_invalid_certs,
    })
    .context("Failed to build WTIS client")?;

    let state = AppState {
        config: Arc::new(config),
        wtis: Arc::new(wtis),
        sessions: Arc::new(SessionStore::new()),
        pending: Arc::new(PendingAuthStore::new()),
        routes: Arc::new(RouteStore::seeded()),
        mock: Arc::new(MockMasterStore::seeded()),
    };

    // CORS configuration - the console UI runs as a separate service
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: 10 requests per second with bursts up to 20, per IP
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );
    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let app = Router::new()
        .route("/", get(routes::root))
        .route("/login", get(routes::login_page))
        .route("/health", get(routes::health_handler))
        // Session handshake
        .route("/auth/login", post(routes::login_submit))
        .route("/auth/verify-otp", post(routes::verify_otp_submit))
        .route("/auth/logout", post(routes::logout_submit))
        // Dashboard
        .route(
            "/api/dashboard/routes",
            get(routes::list_routes).post(routes::create_route),
        )
        .route("/api/dashboard/routes/:id", delete(routes::delete_route))
        .route("/api/dashboard/stats", get(routes::dashboard_stats))
        // Rate master
        .route(
            "/api/rate-master",
            get(routes::list_rates).post(routes::create_rate),
        )
        .route(
            "/api/rate-master/bulk-delete",
            post(routes::bulk_delete_rates),
        )
        .route(
            "/api/rate-master/:id",
            get(routes::get_rate)
                .put(routes::update_rate)
                .delete(routes::delete_rate),
        )
        // Master data
        .route(
            "/api/zones",
            get(routes::list_zones).post(routes::create_zone),
        )
        .route("/api/zones/:id", delete(routes::delete_zone))
        .route(
            "/api/wards",
            get(routes::list_wards).post(routes::create_ward),
        )
        .route("/api/wards/:id", delete(routes::delete_ward))
        .route(
            "/api/connection-categories",
            get(routes::list_connection_categories).post(routes::create_connection_category),
        )
        .route(
            "/api/connection-categories/:id",
            delete(routes::delete_connection_category),
        )
        .route(
            "/api/connection-types",
            get(routes::list_connection_types).post(routes::create_connection_type),
        )
        .route(
            "/api/connection-types/:id",
            delete(routes::delete_connection_type),
        )
        .route(
            "/api/tap-sizes",
            get(routes::list_tap_sizes).post(routes::create_tap_size),
        )
        .route(
            "/api/tap-sizes/:id",
            get(routes::get_tap_size)
                .put(routes::update_tap_size)
                .delete(routes::delete_tap_size),
        )
        // Billing cycles
        .route(
            "/api/billing-cycles",
            get(routes::list_billing_cycles).post(routes::create_billing_cycle),
        )
        .route(
            "/api/billing-cycles/:id",
            put(routes::update_billing_cycle).delete(routes::delete_billing_cycle),
        )
        // ULB branding and service catalog (public: rendered on the login page)
        .route("/api/ulbs", get(routes::list_ulbs))
        .route("/api/ulbs/active", get(routes::list_active_ulbs))
        .route("/api/services", get(routes::list_services))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn_with_state(state.clone(), session_guard))
        .layer(rate_limit_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
