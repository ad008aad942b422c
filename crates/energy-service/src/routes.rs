//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{accounts, dashboard, health, substations, usage};
use crate::state::AppState;

/// Maximum concurrent requests for data endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Liveness check
/// - `GET /health/ready` - Readiness check (pings the store)
///
/// ## Data (concurrency-limited)
/// - `GET /api/accounts` - Distinct accounts with attributes
/// - `GET /api/accounts/distinct` - Distinct account numbers
/// - `GET /api/substations` - Distinct substation/transformer pairs
/// - `GET /api/usage` - Half-hourly usage for one account
///
/// ## Dashboard
/// - `GET /api/navigation` - Navigation bar model
/// - `GET /api/forecast` - Predicted usage for an hour of day
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route("/accounts", get(accounts::list_accounts))
        .route("/accounts/distinct", get(accounts::list_account_numbers))
        .route("/substations", get(substations::list_substations))
        .route("/usage", get(usage::account_usage))
        .route("/navigation", get(dashboard::navigation))
        .route("/forecast", get(dashboard::forecast))
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
