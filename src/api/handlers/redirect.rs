//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::application::services::Shortener;
use crate::domain::entities::alias_url;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /u/{alias}`
///
/// The alias URL is rebuilt from the configured base URL, so the
/// redirect counts as a hit exactly like `GET /unshorten` does.
///
/// # Errors
///
/// Returns 400 Bad Request if the alias is unknown or expired.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alias_url = alias_url(state.base_url(), &alias);

    let original = state.shortener.unshorten(&alias_url).await?;
    tracing::debug!(alias = %alias, target = %original, "Redirecting");

    Ok(Redirect::temporary(&original))
}
