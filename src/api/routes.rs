//! API route configuration.

use crate::api::handlers::{count_handler, redirect_handler, shorten_handler, unshorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes subject to per-client rate limiting.
///
/// # Endpoints
///
/// - `POST /shorten`    - Create the alias URL of a long URL
/// - `GET  /unshorten`  - Resolve an alias URL
/// - `GET  /count`      - Successful resolutions of an alias URL
/// - `GET  /u/{alias}`  - Redirect to the original URL
pub fn limited_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/unshorten", get(unshorten_handler))
        .route("/count", get(count_handler))
        .route("/u/{alias}", get(redirect_handler))
}
