//! Error taxonomy shared by every layer, and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure the shortener can report.
///
/// Variants are compared by kind. The `Display` text of each client-side
/// variant is part of the HTTP contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("invalid URL")]
    InvalidUrl,

    #[error("missing scheme")]
    MissingScheme,

    #[error("missing hostname")]
    MissingHostname,

    #[error("URL not found")]
    NotFound,

    #[error("URL expired")]
    Expired,

    #[error("invalid expiration")]
    InvalidExpiration,

    /// Store-level I/O failure. The detail is logged, never sent to clients.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl AppError {
    /// Returns true for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::Persistence(_))
    }

    /// Maps a `400` body message back to its client-side variant.
    ///
    /// Returns `None` for text no variant produces.
    pub fn from_message(message: &str) -> Option<AppError> {
        let err = match message {
            "invalid URL" => AppError::InvalidUrl,
            "missing scheme" => AppError::MissingScheme,
            "missing hostname" => AppError::MissingHostname,
            "URL not found" => AppError::NotFound,
            "URL expired" => AppError::Expired,
            "invalid expiration" => AppError::InvalidExpiration,
            _ => return None,
        };
        Some(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            let body = ErrorBody {
                error: self.to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        tracing::error!(error = %self, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
