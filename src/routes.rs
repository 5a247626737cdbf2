//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`, `GET /unshorten`, `GET /count`, `GET /u/{alias}` -
//!   rate limited per client
//! - `GET  /health` - store health check (not rate limited)
//!
//! # Middleware
//!
//! Applied outermost first:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and middleware except path
/// normalization.
///
/// Rate limiting keys on the client IP, so the router must be served with
/// `ConnectInfo<SocketAddr>` available.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn api_router(state: AppState, rate_limit: RateLimitSettings) -> Result<Router> {
    let limited = api::routes::limited_routes();
    let limited = if rate_limit.behind_proxy {
        limited.layer(rate_limit::proxy_layer(rate_limit.requests_per_hour)?)
    } else {
        limited.layer(rate_limit::layer(rate_limit.requests_per_hour)?)
    };

    Ok(Router::new()
        .merge(limited)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer()))
}

/// Constructs the application router served by [`crate::server::run`].
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, rate_limit: RateLimitSettings) -> Result<NormalizePath<Router>> {
    let router = api_router(state, rate_limit)?;

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
