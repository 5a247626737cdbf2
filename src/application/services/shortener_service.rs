//! Shorten/unshorten usecase.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{NewUrlMapping, UrlValue};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Entry points of the usecase layer.
///
/// Every call is independent; no state is kept between requests beyond
/// what the repositories persist.
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Shortens `raw_url` and returns the full alias URL.
    ///
    /// Idempotent: the same URL always yields the same alias.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`], [`AppError::MissingScheme`],
    ///   [`AppError::MissingHostname`] for unusable input
    /// - [`AppError::Persistence`] if the mapping cannot be stored
    async fn shorten(
        &self,
        raw_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<String, AppError>;

    /// Resolves an alias URL back to the URL it was created from.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`], [`AppError::MissingScheme`],
    ///   [`AppError::MissingHostname`] for unusable input
    /// - [`AppError::NotFound`] if the alias is unknown
    /// - [`AppError::Expired`] if the mapping expired
    /// - [`AppError::Persistence`] on storage errors
    async fn unshorten(&self, alias_url: &str) -> Result<String, AppError>;
}

/// Base usecase: alias derivation, persistence and expiration checks.
pub struct ShortenerService {
    mappings: Arc<dyn MappingRepository>,
    clock: Arc<dyn Clock>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a service using the wall clock.
    ///
    /// `base_url` is the scheme and host aliases are issued under, e.g.
    /// `https://localhost:8080`.
    pub fn new(mappings: Arc<dyn MappingRepository>, base_url: impl Into<String>) -> Self {
        Self {
            mappings,
            clock: Arc::new(SystemClock),
            base_url: base_url.into(),
        }
    }

    /// Replaces the time source used for expiration checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Shortener for ShortenerService {
    async fn shorten(
        &self,
        raw_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<String, AppError> {
        let url = UrlValue::parse(raw_url, expires_at)?;
        let shortened = url.shorten(&self.base_url)?;

        self.mappings
            .save(NewUrlMapping::new(
                shortened.as_str(),
                raw_url,
                shortened.expires_at(),
            ))
            .await?;

        tracing::debug!(url = %raw_url, alias = %shortened, "Shortened URL");

        Ok(shortened.to_string())
    }

    async fn unshorten(&self, alias_url: &str) -> Result<String, AppError> {
        let url = UrlValue::parse(alias_url, None)?;
        url.validate()?;

        let mapping = self.mappings.get(alias_url).await?;

        if mapping.expired_at(self.clock.now()) {
            tracing::debug!(alias = %alias_url, "Alias expired");
            return Err(AppError::Expired);
        }

        Ok(mapping.original_url)
    }
}
