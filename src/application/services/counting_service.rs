//! Hit-counting decorator over a [`Shortener`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::shortener_service::Shortener;
use crate::domain::repositories::HitCountRepository;
use crate::error::AppError;

/// Wraps a [`Shortener`] and records a hit on every successful resolution.
///
/// Only `unshorten` is overridden; `shorten` is passed through. Counting is
/// best-effort: a failing counter is logged and the resolution still
/// succeeds. Failed resolutions (unknown, expired) are never counted.
pub struct CountingShortener<S> {
    inner: S,
    hit_counts: Arc<dyn HitCountRepository>,
}

impl<S: Shortener> CountingShortener<S> {
    pub fn new(inner: S, hit_counts: Arc<dyn HitCountRepository>) -> Self {
        Self { inner, hit_counts }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the hit count of `alias_url`, `0` if it was never resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    pub async fn hits(&self, alias_url: &str) -> Result<i64, AppError> {
        match self.hit_counts.get(alias_url).await {
            Ok(hits) => Ok(hits),
            Err(AppError::NotFound) => Ok(0),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<S: Shortener> Shortener for CountingShortener<S> {
    async fn shorten(
        &self,
        raw_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<String, AppError> {
        self.inner.shorten(raw_url, expires_at).await
    }

    async fn unshorten(&self, alias_url: &str) -> Result<String, AppError> {
        let original = self.inner.unshorten(alias_url).await?;

        if let Err(e) = self.hit_counts.increment(alias_url).await {
            tracing::warn!(alias = %alias_url, error = %e, "Failed to record hit");
            metrics::counter!("shortener_hit_count_failures_total").increment(1);
        }

        Ok(original)
    }
}
