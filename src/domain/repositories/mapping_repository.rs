//! Repository trait for alias → URL mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias mappings.
///
/// Keys are full alias URLs (`https://<host>/u/<alias>`).
///
/// # Duplicate saves
///
/// The first save for an alias wins. Saving again for the same alias
/// succeeds without changing the stored record, which makes re-shortening
/// the same URL idempotent.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMappingRepository`] - process-lifetime storage
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping stored under `alias`, expiration included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn get(&self, alias: &str) -> Result<UrlMapping, AppError>;

    /// Stores a mapping unless one already exists for the alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn save(&self, new_mapping: NewUrlMapping) -> Result<(), AppError>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}
