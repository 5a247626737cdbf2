//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Mapping storage keyed by alias URL.
///
/// DashMap shards its locks, so saves on different aliases do not contend.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    storage: DashMap<String, UrlMapping>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings, expired ones included.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn get(&self, alias: &str) -> Result<UrlMapping, AppError> {
        self.storage
            .get(alias)
            .map(|entry| entry.value().clone())
            .ok_or(AppError::NotFound)
    }

    async fn save(&self, new_mapping: NewUrlMapping) -> Result<(), AppError> {
        // First writer wins: an existing entry is left untouched.
        self.storage
            .entry(new_mapping.alias.clone())
            .or_insert_with(|| {
                UrlMapping::new(
                    new_mapping.alias,
                    new_mapping.original_url,
                    new_mapping.expires_at,
                    Utc::now(),
                )
            });
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
