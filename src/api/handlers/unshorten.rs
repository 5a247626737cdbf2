//! Handler for alias resolution endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::QueryPairs;
use crate::api::dto::unshorten::{AliasQuery, UnshortenResponse};
use crate::application::services::Shortener;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves an alias URL to the URL it was created from.
///
/// # Endpoint
///
/// `GET /unshorten?url=<alias URL>`
///
/// Every successful call counts as one hit.
///
/// # Errors
///
/// Returns 400 Bad Request for unknown, expired or malformed aliases.
pub async fn unshorten_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<UnshortenResponse>, AppError> {
    let query = AliasQuery::from(pairs);
    let unshortened = state.shortener.unshorten(&query.url).await?;

    Ok(Json(UnshortenResponse { unshortened }))
}
