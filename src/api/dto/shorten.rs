//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

use super::{QueryPairs, first_value};

/// Query parameters of `POST /shorten`.
///
/// A missing `url` becomes an empty string and is rejected by the usecase
/// as `missing scheme`.
#[derive(Debug, Default)]
pub struct ShortenQuery {
    pub url: String,

    /// `YYYY-MM-DD_HH:MM:SS`, UTC. Absent or empty means "never expires".
    pub expiration: Option<String>,
}

impl From<QueryPairs> for ShortenQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            url: first_value(&pairs, "url").unwrap_or_default(),
            expiration: first_value(&pairs, "expiration"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub shortened: String,
}
