//! Handler for hit count endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::QueryPairs;
use crate::api::dto::count::CountResponse;
use crate::api::dto::unshorten::AliasQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns how many times an alias URL was successfully resolved.
///
/// # Endpoint
///
/// `GET /count?url=<alias URL>`
///
/// Aliases that were never resolved, or never created, report `0`.
///
/// ```json
/// { "count": 10 }
/// ```
pub async fn count_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<CountResponse>, AppError> {
    let query = AliasQuery::from(pairs);
    let count = state.shortener.hits(&query.url).await?;

    Ok(Json(CountResponse { count }))
}
