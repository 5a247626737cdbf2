//! Mapping entity: the association between an alias URL and its target.

use chrono::{DateTime, Utc};

/// A stored alias → original URL association.
///
/// Mappings are created once and never updated. An expired mapping stays
/// readable but must not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub alias: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        alias: String,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            alias,
            original_url,
            expires_at,
            created_at,
        }
    }

    pub fn expiring(&self) -> bool {
        self.expires_at.is_some()
    }

    /// True iff an expiration is set and lies strictly before `t`.
    pub fn expired_at(&self, t: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < t)
    }
}

/// Input data for saving a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub alias: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewUrlMapping {
    pub fn new(
        alias: impl Into<String>,
        original_url: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            alias: alias.into(),
            original_url: original_url.into(),
            expires_at,
        }
    }
}
