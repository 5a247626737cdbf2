//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::QueryPairs;
use crate::api::dto::shorten::{ShortenQuery, ShortenResponse};
use crate::application::services::Shortener;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::expiration::parse_expiration;

/// Creates the alias URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten?url=<url>&expiration=<YYYY-MM-DD_HH:MM:SS>`
///
/// Shortening the same URL twice returns the same alias.
///
/// # Response
///
/// ```json
/// { "shortened": "https://localhost:8080/u/5mWd0Jd3BDRIPmoHxFRGYa" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "<message>"}` for an unusable
/// URL or expiration, 500 if the mapping cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<ShortenResponse>, AppError> {
    let query = ShortenQuery::from(pairs);
    let expires_at = query
        .expiration
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(parse_expiration)
        .transpose()?;

    let shortened = state.shortener.shorten(&query.url, expires_at).await?;

    Ok(Json(ShortenResponse { shortened }))
}
