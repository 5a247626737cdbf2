#![allow(dead_code)]

use alias_shortener::api::middleware::rate_limit::RateLimitSettings;
use alias_shortener::domain::clock::ManualClock;
use alias_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::memory::{
    InMemoryHitCountRepository, InMemoryMappingRepository,
};
use alias_shortener::routes::api_router;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "https://localhost:8080";

/// Large enough that no functional test ever hits it.
pub const UNLIMITED: RateLimitSettings = RateLimitSettings {
    requests_per_hour: 1_000_000,
    behind_proxy: false,
};

/// Inserts the `ConnectInfo` the rate limiter keys on, as
/// `into_make_service_with_connect_info` would in production.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Full middleware stack over `state`.
pub fn test_server_with_limits(state: AppState, limits: RateLimitSettings) -> TestServer {
    let app = api_router(state, limits).unwrap().layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

pub fn test_server(state: AppState) -> TestServer {
    test_server_with_limits(state, UNLIMITED)
}

pub fn memory_state() -> AppState {
    AppState::in_memory(BASE_URL)
}

/// In-memory state whose clock starts at 2030-01-01 00:00:00 UTC.
pub fn manual_clock_state() -> (AppState, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));

    let state = AppState::with_clock(
        Arc::new(InMemoryMappingRepository::new()),
        Arc::new(InMemoryHitCountRepository::new()),
        BASE_URL,
        clock.clone(),
    );

    (state, clock)
}

/// Mapping store whose backend is always down.
pub struct UnavailableMappingRepository;

#[async_trait]
impl MappingRepository for UnavailableMappingRepository {
    async fn get(&self, _alias: &str) -> Result<UrlMapping, AppError> {
        Err(AppError::Persistence("connection refused".to_string()))
    }

    async fn save(&self, _new_mapping: NewUrlMapping) -> Result<(), AppError> {
        Err(AppError::Persistence("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableMappingRepository),
        Arc::new(InMemoryHitCountRepository::new()),
        BASE_URL,
    )
}

/// Shortens `url` through the API and returns the alias URL.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").add_query_param("url", url).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["shortened"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Path part of an alias URL, e.g. `/u/abc`.
pub fn alias_path(alias_url: &str) -> String {
    alias_url.strip_prefix(BASE_URL).unwrap().to_string()
}
