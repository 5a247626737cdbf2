//! DTOs for hit count endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}
