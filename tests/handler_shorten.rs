mod common;

use alias_shortener::api::dto::shorten::ShortenResponse;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com/some/long/path")
        .await;

    response.assert_status_ok();
    let body: ShortenResponse = response.json();
    assert!(body.shortened.starts_with("https://localhost:8080/u/"));

    let alias = body.shortened.rsplit('/').next().unwrap();
    assert!(!alias.is_empty());
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let server = common::test_server(common::memory_state());

    let first = common::shorten(&server, "https://example.com/page").await;
    let second = common::shorten(&server, "https://example.com/page").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_shorten_distinct_paths_get_distinct_aliases() {
    let server = common::test_server(common::memory_state());

    let first = common::shorten(&server, "https://foobar/first").await;
    let second = common::shorten(&server, "https://foobar/second").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_shorten_missing_scheme() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "toto.com")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "missing scheme"}));
}

#[tokio::test]
async fn test_shorten_missing_hostname() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "missing hostname"}));
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https:// ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid URL"}));
}

#[tokio::test]
async fn test_shorten_without_url_parameter() {
    let server = common::test_server(common::memory_state());

    let response = server.post("/shorten").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "missing scheme"}));
}

#[tokio::test]
async fn test_shorten_with_expiration() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com")
        .add_query_param("expiration", "2099-12-31_23:59:59")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_empty_expiration_means_never() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com")
        .add_query_param("expiration", "")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_invalid_expiration() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com")
        .add_query_param("expiration", "tomorrow")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid expiration"}));
}

#[tokio::test]
async fn test_shorten_decodes_query_once() {
    let server = common::test_server(common::memory_state());

    // The query extractor decodes `%2520` to `%20`, which the URL keeps.
    let encoded = server
        .post("/shorten")
        .add_raw_query_param("url=https%3A%2F%2Fexample.com%2Fa%2520b")
        .await;
    encoded.assert_status_ok();

    let alias_url = encoded.json::<ShortenResponse>().shortened;
    let response = server
        .get("/unshorten")
        .add_query_param("url", &alias_url)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({"unshortened": "https://example.com/a%20b"}));
}

#[tokio::test]
async fn test_shorten_store_failure_is_internal_error() {
    let server = common::test_server(common::unavailable_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_shorten_requires_post() {
    let server = common::test_server(common::memory_state());

    let response = server
        .get("/shorten")
        .add_query_param("url", "https://example.com")
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_shorten_rejects_malformed_escape() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https://example.com/%zz")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid URL"}));
}

#[tokio::test]
async fn test_shorten_url_without_authority() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_query_param("url", "https:example.com")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "missing hostname"}));
}

#[tokio::test]
async fn test_shorten_repeated_url_uses_first_value() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/shorten")
        .add_raw_query_param("url=https%3A%2F%2Fexample.com%2Ffirst&url=toto.com")
        .await;

    response.assert_status_ok();
    let expected = common::shorten(&server, "https://example.com/first").await;
    assert_eq!(response.json::<ShortenResponse>().shortened, expected);
}
