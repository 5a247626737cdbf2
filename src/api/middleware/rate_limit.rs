//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

const HOUR: Duration = Duration::from_secs(60 * 60);

/// Per-client admission budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Requests admitted per client per hour. Also the burst size.
    pub requests_per_hour: u32,
    /// Key clients by forwarded IP headers instead of the socket peer.
    pub behind_proxy: bool,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            requests_per_hour: 1000,
            behind_proxy: false,
        }
    }
}

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Burst**: `requests_per_hour` requests
/// - **Replenish**: one request every `3600s / requests_per_hour`
///
/// Requests exceeding the limit receive `429 Too Many Requests`; nothing
/// is queued. Requires the server to provide `ConnectInfo<SocketAddr>`.
///
/// # Errors
///
/// Returns an error if `requests_per_hour` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(1000)?);
/// ```
pub fn layer(
    requests_per_hour: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .period(replenish_period(requests_per_hour)?)
        .burst_size(requests_per_hour)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Same budget as [`layer`], keyed by `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` with the peer address as fallback.
///
/// Only safe behind a reverse proxy that overwrites these headers.
pub fn proxy_layer(
    requests_per_hour: u32,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .period(replenish_period(requests_per_hour)?)
        .burst_size(requests_per_hour)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

fn replenish_period(requests_per_hour: u32) -> Result<Duration> {
    anyhow::ensure!(
        requests_per_hour > 0,
        "Rate limit must admit at least one request per hour"
    );
    Ok(HOUR / requests_per_hour)
}
