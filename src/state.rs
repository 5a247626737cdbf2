//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AppShortener, CountingShortener, ShortenerService};
use crate::domain::clock::Clock;
use crate::domain::repositories::{HitCountRepository, MappingRepository};
use crate::infrastructure::memory::{InMemoryHitCountRepository, InMemoryMappingRepository};

#[derive(Clone)]
pub struct AppState {
    /// Shorten/unshorten usecase with hit counting.
    pub shortener: Arc<AppShortener>,
    /// Mapping store, kept for health checks.
    pub mappings: Arc<dyn MappingRepository>,
}

impl AppState {
    pub fn new(
        mappings: Arc<dyn MappingRepository>,
        hit_counts: Arc<dyn HitCountRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        let service = ShortenerService::new(mappings.clone(), base_url);
        Self::from_service(service, mappings, hit_counts)
    }

    /// Like [`AppState::new`], with an explicit time source for expiration checks.
    pub fn with_clock(
        mappings: Arc<dyn MappingRepository>,
        hit_counts: Arc<dyn HitCountRepository>,
        base_url: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let service = ShortenerService::new(mappings.clone(), base_url).with_clock(clock);
        Self::from_service(service, mappings, hit_counts)
    }

    /// Volatile state backed by in-process maps.
    pub fn in_memory(base_url: impl Into<String>) -> Self {
        Self::new(
            Arc::new(InMemoryMappingRepository::new()),
            Arc::new(InMemoryHitCountRepository::new()),
            base_url,
        )
    }

    pub fn base_url(&self) -> &str {
        self.shortener.inner().base_url()
    }

    fn from_service(
        service: ShortenerService,
        mappings: Arc<dyn MappingRepository>,
        hit_counts: Arc<dyn HitCountRepository>,
    ) -> Self {
        Self {
            shortener: Arc::new(CountingShortener::new(service, hit_counts)),
            mappings,
        }
    }
}
