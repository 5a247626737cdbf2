//! DTOs for alias resolution endpoint.

use serde::{Deserialize, Serialize};

use super::{QueryPairs, first_value};

/// Query parameters shared by `GET /unshorten` and `GET /count`.
#[derive(Debug, Default)]
pub struct AliasQuery {
    pub url: String,
}

impl From<QueryPairs> for AliasQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            url: first_value(&pairs, "url").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnshortenResponse {
    pub unshortened: String,
}
