//! Data Transfer Objects for API requests and responses.
//!
//! Requests arrive as query strings; responses are JSON objects with a
//! single field, matching the wire contract clients already depend on.

pub mod count;
pub mod health;
pub mod shorten;
pub mod unshorten;

/// Query string as decoded `(key, value)` pairs, in request order.
///
/// Extracted as pairs rather than a struct so that a repeated key is not a
/// deserialization error: the first occurrence is used.
pub type QueryPairs = Vec<(String, String)>;

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
