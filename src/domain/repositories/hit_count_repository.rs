//! Repository trait for per-alias hit counters.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for hit counters.
///
/// Independent of [`super::MappingRepository`]: a mapping may exist without
/// a counter, since counters are only created on successful resolution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HitCountRepository: Send + Sync {
    /// Returns the number of recorded hits for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias was never resolved.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn get(&self, alias: &str) -> Result<i64, AppError>;

    /// Records one hit, creating the counter at 1 if needed.
    ///
    /// Concurrent increments on the same alias must all be applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn increment(&self, alias: &str) -> Result<(), AppError>;
}
