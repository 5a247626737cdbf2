//! In-memory implementation of the hit count repository.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::repositories::HitCountRepository;
use crate::error::AppError;

/// Hit counters keyed by alias URL.
///
/// `increment` goes through the DashMap entry API, which holds the shard
/// write lock for the read-modify-write, so concurrent increments on one
/// alias serialize while other aliases proceed.
#[derive(Debug, Default)]
pub struct InMemoryHitCountRepository {
    counts: DashMap<String, i64>,
}

impl InMemoryHitCountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HitCountRepository for InMemoryHitCountRepository {
    async fn get(&self, alias: &str) -> Result<i64, AppError> {
        self.counts
            .get(alias)
            .map(|hits| *hits)
            .ok_or(AppError::NotFound)
    }

    async fn increment(&self, alias: &str) -> Result<(), AppError> {
        *self.counts.entry(alias.to_string()).or_insert(0) += 1;
        Ok(())
    }
}
