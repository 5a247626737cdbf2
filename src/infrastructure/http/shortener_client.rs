//! Typed client for a running alias-shortener.
//!
//! Implements [`Shortener`] over the HTTP API, so callers can swap a remote
//! service in for the in-process usecase. Client-side failures come back
//! as the same [`AppError`] variants the server produced.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::dto::count::CountResponse;
use crate::api::dto::shorten::ShortenResponse;
use crate::api::dto::unshorten::UnshortenResponse;
use crate::application::services::Shortener;
use crate::error::{AppError, ErrorBody};
use crate::utils::expiration::format_expiration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HttpShortenerClient {
    client: Client,
    base_url: String,
}

impl HttpShortenerClient {
    /// Creates a client for the service listening at `base_url`,
    /// e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::from_client(client, base_url))
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of successful resolutions of `alias_url`.
    pub async fn count(&self, alias_url: &str) -> Result<i64, AppError> {
        let response = self
            .client
            .get(self.endpoint("count"))
            .query(&[("url", alias_url)])
            .send()
            .await
            .map_err(transport_error)?;

        let body: CountResponse = decode(response).await?;
        Ok(body.count)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Shortener for HttpShortenerClient {
    async fn shorten(
        &self,
        raw_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<String, AppError> {
        let mut query = vec![("url", raw_url.to_string())];
        if let Some(at) = expires_at {
            query.push(("expiration", format_expiration(at)));
        }

        let response = self
            .client
            .post(self.endpoint("shorten"))
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let body: ShortenResponse = decode(response).await?;
        Ok(body.shortened)
    }

    async fn unshorten(&self, alias_url: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(self.endpoint("unshorten"))
            .query(&[("url", alias_url)])
            .send()
            .await
            .map_err(transport_error)?;

        let body: UnshortenResponse = decode(response).await?;
        Ok(body.unshortened)
    }
}

/// Reads a `200` body as `T` and turns a `400` back into its [`AppError`].
///
/// Any other status, or a `400` whose message no variant produces, is a
/// [`AppError::Persistence`] since the caller cannot act on it.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    match response.status() {
        StatusCode::OK => response.json::<T>().await.map_err(transport_error),
        StatusCode::BAD_REQUEST => {
            let body: ErrorBody = response.json().await.map_err(transport_error)?;
            Err(AppError::from_message(&body.error).unwrap_or_else(|| {
                AppError::Persistence(format!("unexpected error: {}", body.error))
            }))
        }
        status => {
            tracing::warn!(%status, "Shortener returned an unexpected status");
            Err(AppError::Persistence(format!("unexpected status: {status}")))
        }
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::Persistence(e.to_string())
}
