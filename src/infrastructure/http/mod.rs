//! Remote shortener reached over the HTTP API.

pub mod shortener_client;

pub use shortener_client::HttpShortenerClient;
